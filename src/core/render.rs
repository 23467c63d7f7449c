//! Turning the display file into RGB pixels.
//!
//! Each pixel takes its colour cell's ink when its bitmap bit is set and
//! the paper otherwise. BRIGHT picks the full intensity half of the
//! palette; FLASH cells swap ink and paper while the flash phase is on.

use log::debug;
use palette::Srgb;

use crate::core::{
    framebuffer::pixel_address,
    spectrum::{ATTR_COLUMNS, BITMAP_ADDR, SCREEN_HEIGHT, SCREEN_WIDTH, YMAX},
    utils::split_attribute,
    Source,
};

/// `0xRRGGBB` colours, the eight normal ones followed by the eight BRIGHT.
const PALETTE: [u32; 16] = [
    0x00_0000, // Black
    0x00_00cd, // Blue
    0xcd_0000, // Red
    0xcd_00cd, // Magenta
    0x00_cd00, // Green
    0x00_cdcd, // Cyan
    0xcd_cd00, // Yellow
    0xcd_cdcd, // White
    0x00_0000,
    0x00_00ff,
    0xff_0000,
    0xff_00ff,
    0x00_ff00,
    0x00_ffff,
    0xff_ff00,
    0xff_ffff,
];

/// The RGB value of colour `index` (0-7).
pub fn colour(index: u8, bright: bool) -> Srgb<u8> {
    let rgb = PALETTE[usize::from(index & 0x07) + if bright { 8 } else { 0 }];
    Srgb::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// The border is never BRIGHT.
pub fn border_rgb(border: u8) -> Srgb<u8> {
    colour(border, false)
}

/// A rendered 256x192 screen, RGB24, rows top to bottom.
pub struct Frame {
    pixels: Vec<[u8; 3]>,
}

impl Frame {
    pub const WIDTH: u32 = SCREEN_WIDTH;
    pub const HEIGHT: u32 = SCREEN_HEIGHT;

    pub fn pixel(&self, x: u8, y: u8) -> Option<Srgb<u8>> {
        let [r, g, b] = *self
            .pixels
            .get(usize::from(y) * Self::WIDTH as usize + usize::from(x))?;
        Some(Srgb::new(r, g, b))
    }

    /// Packed `r, g, b` bytes, `WIDTH * 3` per row.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Render the display file in `fb` (offset 0 at `0x4000`).
///
/// Bytes the framebuffer does not cover render as 0.
pub fn render_rgb24<T: Source<u8>>(fb: &T, flash_phase: bool) -> Frame {
    let mut pixels = Vec::with_capacity((SCREEN_WIDTH * SCREEN_HEIGHT) as usize);

    for y in 0..=YMAX {
        for col in 0..ATTR_COLUMNS {
            let addr = pixel_address(col * 8, y);
            let bitmap = fb
                .item_at(usize::from(addr.bitmap - BITMAP_ADDR))
                .unwrap_or(0);
            let attr = fb
                .item_at(usize::from(addr.attr - BITMAP_ADDR))
                .unwrap_or(0);

            let (ink, paper, bright, flash) = split_attribute(attr);
            let (fg, bg) = if flash && flash_phase {
                (paper, ink)
            } else {
                (ink, paper)
            };
            let fg = colour(fg, bright);
            let bg = colour(bg, bright);

            for bit in (0..8).rev() {
                let c = if bitmap & (1 << bit) != 0 { fg } else { bg };
                pixels.push([c.red, c.green, c.blue]);
            }
        }
    }

    debug!("rendered {} pixels, flash phase {flash_phase}", pixels.len());
    Frame { pixels }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        spectrum::{BLACK, BLUE, RED, WHITE, YELLOW},
        utils::attribute,
        DisplayFile,
    };

    #[test]
    fn test_empty_screen_is_black() {
        let frame = render_rgb24(&DisplayFile::new(), false);
        assert_eq!(frame.as_bytes().len(), 256 * 192 * 3);
        assert!(frame.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_ink_and_paper() {
        let mut screen = DisplayFile::new();
        screen.plot(9, 17, attribute(BLUE, YELLOW, 0, 0));

        let frame = render_rgb24(&screen, false);
        assert_eq!(frame.pixel(9, 17), Some(Srgb::new(0x00, 0x00, 0xcd)));
        // same cell, pixel not set
        assert_eq!(frame.pixel(10, 17), Some(Srgb::new(0xcd, 0xcd, 0x00)));
        // neighbouring cell is untouched
        assert_eq!(frame.pixel(16, 17), Some(Srgb::new(0, 0, 0)));
    }

    #[test]
    fn test_bright() {
        let mut screen = DisplayFile::new();
        screen.plot(0, 0, attribute(BLUE, BLACK, 1, 0));

        let frame = render_rgb24(&screen, false);
        assert_eq!(frame.pixel(0, 0), Some(Srgb::new(0x00, 0x00, 0xff)));
    }

    #[test]
    fn test_flash_swaps_ink_and_paper() {
        let mut screen = DisplayFile::new();
        let attr = attribute(WHITE, RED, 0, 1);
        screen.clear(attr);

        let steady = render_rgb24(&screen, false);
        let flashed = render_rgb24(&screen, true);
        assert_eq!(steady.pixel(200, 100), Some(colour(RED, false)));
        assert_eq!(flashed.pixel(200, 100), Some(colour(WHITE, false)));
    }

    #[test]
    fn test_border_rgb() {
        assert_eq!(border_rgb(WHITE), Srgb::new(0xcd, 0xcd, 0xcd));
        assert_eq!(border_rgb(0x0a), colour(RED, false));
    }

    #[test]
    fn test_pixel_out_of_frame() {
        let frame = render_rgb24(&DisplayFile::new(), false);
        assert_eq!(frame.pixel(0, 192), None);
    }
}
