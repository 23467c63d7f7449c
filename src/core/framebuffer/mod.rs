//! Drawing into the display file.
//!
//! Every shape is built from [`plot`], which clamps its inputs onto the
//! screen, finds the bitmap byte and colour cell through [`pixel_address`]
//! and composites the pixel according to the [`Pen`]'s draw mode.

use log::{trace, warn};

use crate::core::{
    spectrum::{ATTR_SIZE, BITMAP_ADDR, BITMAP_SIZE, XMAX, YMAX},
    Sink, Source,
};


mod address;
mod circle;
mod line;
mod pen;
mod rect;

pub use address::{pixel_address, PixelAddress};
pub use circle::{circle, filled_circle};
pub use line::line;
pub use pen::{composite, DrawMode, Pen};
pub use rect::{filled_rect, rect};

/// A common trait for byte-addressed display memory.
pub(crate) trait Screen {
    type Framebuffer: Source<u8> + Sink<u8>;
    /// Address of offset 0 in the framebuffer.
    const BASE: u16;
    fn fb(&self) -> &Self::Framebuffer;
    fn fb_mut(&mut self) -> &mut Self::Framebuffer;
}

/// A framebuffer that starts at the first bitmap byte.
struct DisplayFileScreen<'a, B: Sink<u8> + Source<u8>> {
    fb: &'a mut B,
}

impl<'a, B: Sink<u8> + Source<u8>> Screen for DisplayFileScreen<'a, B> {
    type Framebuffer = B;
    const BASE: u16 = BITMAP_ADDR;

    fn fb(&self) -> &Self::Framebuffer {
        self.fb
    }

    fn fb_mut(&mut self) -> &mut Self::Framebuffer {
        self.fb
    }
}

/// Plot a single pixel.
///
/// `x` is clamped to `0..=255`, `y` to `0..=191` and `attr` to `0..=255`;
/// nothing is ever rejected. The attribute is written to the pixel's colour
/// cell and selects the draw mode, see [`Pen`].
///
/// `fb` must cover the whole display file ([`DISPLAY_FILE_SIZE`] bytes).
///
/// [`DISPLAY_FILE_SIZE`]: crate::core::spectrum::DISPLAY_FILE_SIZE
pub fn plot<T: Source<u8> + Sink<u8>>(fb: &mut T, x: i32, y: i32, attr: impl Into<Pen>) {
    let mut screen = DisplayFileScreen { fb };
    plot_impl(&mut screen, x.into(), y.into(), attr.into())
}

pub(crate) fn plot_impl<S: Screen>(s: &mut S, x: i64, y: i64, pen: Pen) {
    let addr = pixel_address(clamp_coord(x, XMAX), clamp_coord(y, YMAX));
    let bitmap_idx = usize::from(addr.bitmap - S::BASE);
    let attr_idx = usize::from(addr.attr - S::BASE);

    let Some(fb_byte) = s.fb().item_at(bitmap_idx) else {
        warn!("framebuffer has no byte at {:#06x}", addr.bitmap);
        return;
    };
    if s.fb().item_at(attr_idx).is_none() {
        warn!("framebuffer has no byte at {:#06x}", addr.attr);
        return;
    }

    s.fb_mut()
        .set_item_at(bitmap_idx, composite(fb_byte, addr.bit, pen.mode()));
    s.fb_mut().set_item_at(attr_idx, pen.color);
}

/// Read back a single pixel.
///
/// Returns `None` when `y` is below the screen or `fb` is too short.
pub fn pixel<T: Source<u8>>(fb: &T, x: u8, y: u8) -> Option<bool> {
    if y > YMAX {
        return None;
    }

    let addr = pixel_address(x, y);
    fb.item_at(usize::from(addr.bitmap - BITMAP_ADDR))
        .map(|byte| byte & addr.mask() != 0)
}

/// Clears the bitmap and paints every colour cell with `attr`.
pub fn clear<T: Sink<u8>>(fb: &mut T, attr: u8) {
    trace!("clear with attribute {attr:#04x}");
    fb.fill(0..BITMAP_SIZE, 0);
    fb.fill(BITMAP_SIZE..BITMAP_SIZE + ATTR_SIZE, attr);
}

/// Clears the bitmap, leaving the colour cells alone.
pub fn clear_bitmap<T: Sink<u8>>(fb: &mut T) {
    trace!("clear bitmap");
    fb.fill(0..BITMAP_SIZE, 0);
}

fn clamp_coord(v: i64, max: u8) -> u8 {
    v.clamp(0, i64::from(max)) as u8
}
