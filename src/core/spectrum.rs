//! ZX Spectrum display file constants.

/// Largest x coordinate on the screen.
pub const XMAX: u8 = 255;
/// Largest y coordinate on the screen.
pub const YMAX: u8 = 191;

pub const SCREEN_WIDTH: u32 = XMAX as u32 + 1;
pub const SCREEN_HEIGHT: u32 = YMAX as u32 + 1;

/// Address of the first bitmap byte.
pub const BITMAP_ADDR: u16 = 0x4000;
pub const BITMAP_SIZE: usize = 0x1800;

/// Address of the first colour cell.
pub const ATTR_ADDR: u16 = 0x5800;
pub const ATTR_SIZE: usize = 0x300;

/// Colour cells per row of the attribute grid.
pub const ATTR_COLUMNS: u8 = 32;
/// Rows of the attribute grid.
pub const ATTR_ROWS: u8 = 24;

/// Bitmap and attributes together, as laid out from [`BITMAP_ADDR`].
pub const DISPLAY_FILE_SIZE: usize = BITMAP_SIZE + ATTR_SIZE;

/// Attribute bit that switches plotting to OVER (XOR) mode.
pub const OVER_FLAG: u8 = 0b0000_0010;
/// Attribute bit that switches plotting to INVERSE (erase) mode.
pub const INVERSE_FLAG: u8 = 0b0000_1000;

pub const BLACK: u8 = 0;
pub const BLUE: u8 = 1;
pub const RED: u8 = 2;
pub const MAGENTA: u8 = 3;
pub const GREEN: u8 = 4;
pub const CYAN: u8 = 5;
pub const YELLOW: u8 = 6;
pub const WHITE: u8 = 7;
