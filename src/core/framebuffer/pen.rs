use crate::core::spectrum::{INVERSE_FLAG, OVER_FLAG};

/// How a plotted pixel combines with the bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawMode {
    /// Set the pixel.
    Paint,
    /// Toggle the pixel. Plotting twice restores it.
    Over,
    /// Clear the pixel.
    Inverse,
    /// OVER and INVERSE together: the pixel is left as it was.
    Inert,
}

/// A plotting attribute split into its two roles.
///
/// The raw byte is stored verbatim in the colour cell of every pixel drawn,
/// while bits 1 and 3 of that same byte pick the draw mode. Any colour whose
/// ink or paper happens to have those bits set therefore draws in OVER or
/// INVERSE mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pen {
    pub color: u8,
    pub overlay: bool,
    pub erase: bool,
}

impl Pen {
    pub fn from_raw(attr: u8) -> Self {
        Self {
            color: attr,
            overlay: attr & OVER_FLAG != 0,
            erase: attr & INVERSE_FLAG != 0,
        }
    }

    pub fn mode(&self) -> DrawMode {
        match (self.overlay, self.erase) {
            (false, false) => DrawMode::Paint,
            (true, false) => DrawMode::Over,
            (false, true) => DrawMode::Inverse,
            (true, true) => DrawMode::Inert,
        }
    }
}

impl From<u8> for Pen {
    fn from(attr: u8) -> Self {
        Pen::from_raw(attr)
    }
}

/// Saturates into `0..=255`.
impl From<i32> for Pen {
    fn from(attr: i32) -> Self {
        Pen::from_raw(attr.clamp(0, 0xff) as u8)
    }
}

/// Combine bit `bit` of a bitmap byte with the draw mode. Other bits pass
/// through untouched.
pub fn composite(fb_byte: u8, bit: u8, mode: DrawMode) -> u8 {
    let mask = 1 << bit;
    match mode {
        DrawMode::Paint => fb_byte | mask,
        DrawMode::Over => fb_byte ^ mask,
        DrawMode::Inverse => fb_byte & !mask,
        DrawMode::Inert => fb_byte,
    }
}
