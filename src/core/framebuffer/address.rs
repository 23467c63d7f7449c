use crate::core::spectrum::{ATTR_ADDR, ATTR_COLUMNS, BITMAP_ADDR, YMAX};

/// Where a pixel lives in the display file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelAddress {
    /// Address of the bitmap byte holding the pixel.
    pub bitmap: u16,
    /// Bit number of the pixel within that byte. Bit 7 is the leftmost pixel.
    pub bit: u8,
    /// Address of the colour cell covering the pixel's 8x8 block.
    pub attr: u16,
}

impl PixelAddress {
    /// The single bit selecting this pixel in its bitmap byte.
    pub fn mask(&self) -> u8 {
        1 << self.bit
    }
}

/// Map a screen coordinate to its bitmap byte, bit and colour cell.
///
/// The bitmap is split into three vertical thirds of 64 rows. Inside a
/// third, consecutive 256-byte blocks hold the same pixel row of all eight
/// character rows, so the address bits of `y` are shuffled:
/// `010 y7 y6 y2 y1 y0 y5 y4 y3 x7 x6 x5 x4 x3`.
///
/// `y` must not exceed [`YMAX`].
pub fn pixel_address(x: u8, y: u8) -> PixelAddress {
    debug_assert!(y <= YMAX, "y = {y} is below the screen");

    let (x, y) = (u16::from(x), u16::from(y));

    let bitmap = BITMAP_ADDR
        + ((y & 0xc0) << 5)
        + ((y & 0x07) << 8)
        + ((y & 0x38) << 2)
        + (x >> 3);
    let attr = ATTR_ADDR + (y >> 3) * u16::from(ATTR_COLUMNS) + (x >> 3);

    PixelAddress {
        bitmap,
        bit: 7 - (x & 7) as u8,
        attr,
    }
}
