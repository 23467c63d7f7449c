//! An owned display file.

use std::ops::Range;

use anyhow::bail;

use crate::core::{
    framebuffer::{self, Pen},
    spectrum::{ATTR_COLUMNS, ATTR_ROWS, ATTR_SIZE, BITMAP_SIZE, DISPLAY_FILE_SIZE},
    Sink, Source,
};

/// The 6912 bytes of screen memory (bitmap then colour cells) plus the
/// border colour.
///
/// Offset 0 is address `0x4000`, so the free functions in
/// [`framebuffer`] can draw on it directly. The methods here are shorthands
/// for them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayFile {
    memory: [u8; DISPLAY_FILE_SIZE],
    border: u8,
}

impl DisplayFile {
    /// A black screen: empty bitmap, all colour cells 0 and a black border.
    pub fn new() -> Self {
        Self {
            memory: [0; DISPLAY_FILE_SIZE],
            border: 0,
        }
    }

    /// Load a raw `.scr` dump.
    pub fn from_scr(bytes: &[u8]) -> anyhow::Result<Self> {
        let memory: [u8; DISPLAY_FILE_SIZE] = match bytes.try_into() {
            Ok(memory) => memory,
            Err(_) => bail!(
                "screen dump is {} bytes, expected {DISPLAY_FILE_SIZE}",
                bytes.len()
            ),
        };

        Ok(Self { memory, border: 0 })
    }

    /// The whole display file, ready to be written out as a `.scr` dump.
    pub fn as_bytes(&self) -> &[u8; DISPLAY_FILE_SIZE] {
        &self.memory
    }

    pub fn bitmap(&self) -> &[u8] {
        &self.memory[..BITMAP_SIZE]
    }

    pub fn attributes(&self) -> &[u8] {
        &self.memory[BITMAP_SIZE..]
    }

    pub fn border(&self) -> u8 {
        self.border
    }

    /// Set the border colour. Only the low three bits are kept.
    pub fn set_border(&mut self, colour: u8) {
        self.border = colour & 0x07;
    }

    /// Whether the pixel at `(x, y)` is set. `None` below the screen.
    pub fn pixel(&self, x: u8, y: u8) -> Option<bool> {
        framebuffer::pixel(self, x, y)
    }

    /// The colour cell at column `col`, row `row`.
    pub fn cell(&self, col: u8, row: u8) -> Option<u8> {
        if col >= ATTR_COLUMNS || row >= ATTR_ROWS {
            return None;
        }

        let idx = usize::from(row) * usize::from(ATTR_COLUMNS) + usize::from(col);
        debug_assert!(idx < ATTR_SIZE);
        Some(self.memory[BITMAP_SIZE + idx])
    }

    pub fn clear(&mut self, attr: u8) {
        framebuffer::clear(self, attr)
    }

    pub fn clear_bitmap(&mut self) {
        framebuffer::clear_bitmap(self)
    }

    pub fn plot(&mut self, x: i32, y: i32, attr: impl Into<Pen>) {
        framebuffer::plot(self, x, y, attr)
    }

    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, attr: impl Into<Pen>) {
        framebuffer::line(self, x1, y1, x2, y2, attr)
    }

    pub fn rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, attr: impl Into<Pen>) {
        framebuffer::rect(self, x1, y1, x2, y2, attr)
    }

    pub fn filled_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, attr: impl Into<Pen>) {
        framebuffer::filled_rect(self, x1, y1, x2, y2, attr)
    }

    pub fn circle(&mut self, x0: i32, y0: i32, radius: i32, attr: impl Into<Pen>) {
        framebuffer::circle(self, x0, y0, radius, attr)
    }

    pub fn filled_circle(&mut self, x0: i32, y0: i32, radius: i32, attr: impl Into<Pen>) {
        framebuffer::filled_circle(self, x0, y0, radius, attr)
    }
}

impl Default for DisplayFile {
    fn default() -> Self {
        Self::new()
    }
}

impl Source<u8> for DisplayFile {
    fn item_at(&self, offset: usize) -> Option<u8> {
        self.memory.item_at(offset)
    }

    fn items_at<const L: usize>(&self, offset: usize) -> Option<[u8; L]> {
        self.memory.items_at(offset)
    }
}

impl Sink<u8> for DisplayFile {
    fn set_item_at(&mut self, offset: usize, item: u8) {
        self.memory.set_item_at(offset, item)
    }

    fn fill(&mut self, range: Range<usize>, item: u8) {
        Sink::fill(&mut self.memory, range, item)
    }
}
