use std::ops::Range;

pub mod display;
pub mod framebuffer;
pub mod render;
pub mod scr;
pub mod spectrum;
pub mod utils;

#[doc(inline)]
pub use display::DisplayFile;
#[doc(inline)]
pub use framebuffer::{
    circle, clear, clear_bitmap, filled_circle, filled_rect, line, pixel, pixel_address, plot,
    rect, DrawMode, Pen, PixelAddress,
};

/// Read access to display file bytes.
///
/// Offset 0 is the first bitmap byte at [`BITMAP_ADDR`](spectrum::BITMAP_ADDR)
/// and the colour cells follow the bitmap, so a `[u8; 6912]`, a `Vec<u8>` or
/// a [`DisplayFile`] can all be drawn on. A shorter buffer is allowed; reads
/// past its end return `None`.
pub trait Source<T>
where
    T: Copy,
{
    /// The byte `offset` bytes after `0x4000`, if the buffer reaches it.
    fn item_at(&self, offset: usize) -> Option<T>;

    /// `L` consecutive bytes starting at `offset`, or `None` if any is missing.
    fn items_at<const L: usize>(&self, offset: usize) -> Option<[T; L]>;
}

impl<T: Copy> Source<T> for Vec<T> {
    fn item_at(&self, offset: usize) -> Option<T> {
        self.get(offset).copied()
    }

    fn items_at<const L: usize>(&self, offset: usize) -> Option<[T; L]> {
        self.get(offset..(offset + L))
            .and_then(|s| s.try_into().ok())
    }
}

impl<const N: usize, T: Copy> Source<T> for [T; N] {
    fn item_at(&self, offset: usize) -> Option<T> {
        self.get(offset).copied()
    }

    fn items_at<const L: usize>(&self, offset: usize) -> Option<[T; L]> {
        self.get(offset..(offset + L))
            .and_then(|s| s.try_into().ok())
    }
}

/// Write access to display file bytes, with the same offsets as [`Source`].
///
/// Writing past the end of the buffer panics like slice indexing does;
/// [`plot`] checks with [`Source::item_at`] first.
pub trait Sink<T>
where
    T: Copy,
{
    /// Overwrite the byte `offset` bytes after `0x4000`.
    fn set_item_at(&mut self, offset: usize, item: T);

    /// Set every byte in `range`, e.g. the whole bitmap or all colour cells.
    fn fill(&mut self, range: Range<usize>, item: T);
}

impl<T> Sink<T> for Vec<T>
where
    T: Copy,
{
    fn set_item_at(&mut self, offset: usize, item: T) {
        self[offset] = item
    }

    fn fill(&mut self, range: Range<usize>, item: T) {
        <[T]>::fill(&mut self[range], item)
    }
}

impl<const N: usize, T> Sink<T> for [T; N]
where
    T: Copy,
{
    fn set_item_at(&mut self, offset: usize, item: T) {
        self[offset] = item
    }

    fn fill(&mut self, range: Range<usize>, item: T) {
        <[T]>::fill(&mut self[range], item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::spectrum::{ATTR_SIZE, BITMAP_SIZE, DISPLAY_FILE_SIZE};

    #[test]
    fn test_short_buffer_reads() {
        let bitmap_only = vec![0x55u8; BITMAP_SIZE];
        assert_eq!(bitmap_only.item_at(BITMAP_SIZE - 1), Some(0x55));
        assert_eq!(bitmap_only.item_at(BITMAP_SIZE), None);
        assert_eq!(bitmap_only.items_at::<2>(BITMAP_SIZE - 1), None);
        assert_eq!(bitmap_only.items_at::<2>(0), Some([0x55, 0x55]));
    }

    #[test]
    fn test_fill_colour_cells() {
        let mut memory = [0u8; DISPLAY_FILE_SIZE];
        Sink::fill(&mut memory, BITMAP_SIZE..DISPLAY_FILE_SIZE, 0x38);

        assert!(memory[..BITMAP_SIZE].iter().all(|&b| b == 0));
        assert_eq!(
            memory.items_at::<ATTR_SIZE>(BITMAP_SIZE),
            Some([0x38; ATTR_SIZE])
        );
    }
}
