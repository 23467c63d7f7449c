use log::trace;

use crate::core::{Sink, Source};

use super::{plot_impl, DisplayFileScreen, Pen, Screen};

/// Draw a circle outline centered on `(x0, y0)`.
///
/// Midpoint algorithm: one octant is walked from `(radius, 0)` until `x`
/// drops below `y`, and every step is mirrored into the other seven.
/// A negative radius draws nothing; a radius of 0 plots just the center.
pub fn circle<T: Source<u8> + Sink<u8>>(
    fb: &mut T,
    x0: i32,
    y0: i32,
    radius: i32,
    attr: impl Into<Pen>,
) {
    trace!("circle ({x0}, {y0}) r={radius}");
    let mut screen = DisplayFileScreen { fb };
    circle_impl(&mut screen, x0.into(), y0.into(), radius.into(), attr.into());
}

pub(crate) fn circle_impl<S: Screen>(screen: &mut S, x0: i64, y0: i64, radius: i64, pen: Pen) {
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - x;

    while x >= y {
        plot_impl(screen, x0 + x, y0 + y, pen);
        plot_impl(screen, x0 + y, y0 + x, pen);
        plot_impl(screen, x0 - x, y0 + y, pen);
        plot_impl(screen, x0 - y, y0 + x, pen);
        plot_impl(screen, x0 - x, y0 - y, pen);
        plot_impl(screen, x0 - y, y0 - x, pen);
        plot_impl(screen, x0 + x, y0 - y, pen);
        plot_impl(screen, x0 + y, y0 - x, pen);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x + 1);
        }
    }
}

/// Draw a disc as concentric outlines from `radius` down to 1.
///
/// Radius 0 is never drawn, so the center pixel itself is left untouched.
pub fn filled_circle<T: Source<u8> + Sink<u8>>(
    fb: &mut T,
    x0: i32,
    y0: i32,
    radius: i32,
    attr: impl Into<Pen>,
) {
    trace!("filled circle ({x0}, {y0}) r={radius}");
    let mut screen = DisplayFileScreen { fb };
    let pen: Pen = attr.into();
    for r in (1..=radius).rev() {
        circle_impl(&mut screen, x0.into(), y0.into(), r.into(), pen);
    }
}
