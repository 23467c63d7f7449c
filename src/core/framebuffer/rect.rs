use log::trace;

use crate::core::{Sink, Source};

use super::{plot_impl, DisplayFileScreen, Pen, Screen};

/// Draw the outline of a rectangle with corners `(x1, y1)` and `(x2, y2)`.
///
/// The four edges are swept one after the other (top left to right, right
/// top to bottom, bottom right to left, left bottom to top), so every corner
/// is plotted twice. In OVER mode that leaves the corners unchanged.
pub fn rect<T: Source<u8> + Sink<u8>>(
    fb: &mut T,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    attr: impl Into<Pen>,
) {
    trace!("rect ({x1}, {y1}) -> ({x2}, {y2})");
    let mut screen = DisplayFileScreen { fb };
    rect_impl(&mut screen, x1, y1, x2, y2, attr.into());
}

pub(crate) fn rect_impl<S: Screen>(screen: &mut S, x1: i32, y1: i32, x2: i32, y2: i32, pen: Pen) {
    let (left, top) = (i64::from(x1), i64::from(y1));
    let (right, bottom) = (i64::from(x2), i64::from(y2));

    for x in left..=right {
        plot_impl(screen, x, top, pen);
    }
    for y in top..=bottom {
        plot_impl(screen, right, y, pen);
    }
    for x in (left..=right).rev() {
        plot_impl(screen, x, bottom, pen);
    }
    for y in (top..=bottom).rev() {
        plot_impl(screen, left, y, pen);
    }
}

/// Fill the rectangle with corners `(x1, y1)` and `(x2, y2)`, row by row.
pub fn filled_rect<T: Source<u8> + Sink<u8>>(
    fb: &mut T,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    attr: impl Into<Pen>,
) {
    trace!("filled rect ({x1}, {y1}) -> ({x2}, {y2})");
    let mut screen = DisplayFileScreen { fb };
    filled_rect_impl(&mut screen, x1, y1, x2, y2, attr.into());
}

pub(crate) fn filled_rect_impl<S: Screen>(
    screen: &mut S,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    pen: Pen,
) {
    for y in y1..=y2 {
        for x in x1..=x2 {
            plot_impl(screen, x.into(), y.into(), pen);
        }
    }
}
