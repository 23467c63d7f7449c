//! Various utility functions for attribute bytes.

/// Pack ink, paper, BRIGHT and FLASH into an attribute byte:
/// `ink + 8 * paper + 64 * bright + 128 * flash`.
///
/// Nothing is validated. Out of range fields spill into their neighbours
/// and the sum wraps at 256, as it would in an 8-bit register.
pub fn attribute(ink: u8, paper: u8, bright: u8, flash: u8) -> u8 {
    ink.wrapping_add(paper.wrapping_mul(8))
        .wrapping_add(bright.wrapping_mul(64))
        .wrapping_add(flash.wrapping_mul(128))
}

/// Split an attribute byte into `(ink, paper, bright, flash)`.
pub fn split_attribute(attr: u8) -> (u8, u8, bool, bool) {
    (
        attr & 0x07,
        (attr >> 3) & 0x07,
        attr & 0x40 != 0,
        attr & 0x80 != 0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        spectrum::{BLACK, BLUE, RED, WHITE, YELLOW},
        DisplayFile,
    };

    #[test]
    fn test_attribute() {
        assert_eq!(attribute(RED, WHITE, 1, 0), 122);
        assert_eq!(attribute(BLACK, BLACK, 0, 0), 0);
        assert_eq!(attribute(WHITE, WHITE, 1, 1), 0xff);
    }

    #[test]
    fn test_attribute_overlapping_fields() {
        // ink 9 spills into paper
        assert_eq!(attribute(9, 0, 0, 0), attribute(1, 1, 0, 0));
        assert_eq!(attribute(0, 0, 0, 2), 0);
    }

    #[test]
    fn test_attribute_wraps_instead_of_saturating() {
        let attr = attribute(WHITE, WHITE, 1, 2);
        assert_eq!(attr, 127);

        let mut screen = DisplayFile::new();
        screen.plot(0, 0, attr);
        assert_eq!(screen.cell(0, 0), Some(127));

        // the unpacked sum only saturates when handed over as an i32
        screen.plot(0, 0, 7 + 8 * 7 + 64 + 128 * 2);
        assert_eq!(screen.cell(0, 0), Some(0xff));
    }

    #[test]
    fn test_split_attribute() {
        assert_eq!(
            split_attribute(attribute(BLUE, YELLOW, 1, 0)),
            (BLUE, YELLOW, true, false)
        );
        assert_eq!(split_attribute(0x80), (0, 0, false, true));
    }
}
