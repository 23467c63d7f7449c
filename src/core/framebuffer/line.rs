use log::trace;

use crate::core::{Sink, Source};

use super::{plot_impl, DisplayFileScreen, Pen, Screen};

/// Draw a line between two points.
///
/// A symmetric DDA: both axes accumulate their delta every step and advance
/// once the error reaches the length of the longer axis. The loop runs
/// `distance + 2` times, so one extra point is plotted past `(x2, y2)`
/// along the line's direction.
pub fn line<T: Source<u8> + Sink<u8>>(
    fb: &mut T,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    attr: impl Into<Pen>,
) {
    trace!("line ({x1}, {y1}) -> ({x2}, {y2})");
    line_impl(
        &mut DisplayFileScreen { fb },
        x1.into(),
        y1.into(),
        x2.into(),
        y2.into(),
        attr.into(),
    );
}

pub(crate) fn line_impl<S: Screen>(
    screen: &mut S,
    mut x: i64,
    mut y: i64,
    x2: i64,
    y2: i64,
    pen: Pen,
) {
    let (dx, dy) = (x2 - x, y2 - y);
    let (incx, incy) = (dx.signum(), dy.signum());
    let (dx, dy) = (dx.abs(), dy.abs());
    let distance = dx.max(dy);

    let mut xerr = 0;
    let mut yerr = 0;

    for _ in 0..distance + 2 {
        plot_impl(screen, x, y, pen);

        xerr += dx;
        yerr += dy;

        if xerr >= distance {
            xerr -= distance;
            x += incx;
        }

        if yerr >= distance {
            yerr -= distance;
            y += incy;
        }
    }
}
