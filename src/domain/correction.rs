//! Constrained-window correction
//!
//! Some windows enforce a minimum size larger than the requested tile. After
//! the size write they end up wider or taller than asked and can hang off the
//! trailing or bottom screen edge. The fix is to move them back, never to
//! resize them again.

use crate::domain::core::{Point, Rect};

/// Computes a new origin for a window that overflows the screen
///
/// Returns `None` when the right and bottom edges of `actual` are within
/// `screen`. Otherwise each overflowing axis is re-anchored so the window
/// ends `padding` short of the screen's far edge; the other axis keeps its
/// current coordinate. A window larger than the screen gets an origin in
/// front of the screen's origin, possibly negative.
pub fn corrected_origin(actual: Rect, screen: Rect, padding: f64) -> Option<Point> {
    let overflows_right = actual.right() > screen.right();
    let overflows_bottom = actual.bottom() > screen.bottom();

    if !overflows_right && !overflows_bottom {
        return None;
    }

    let x = if overflows_right {
        screen.right() - padding - actual.w
    } else {
        actual.x
    };
    let y = if overflows_bottom {
        screen.bottom() - padding - actual.h
    } else {
        actual.y
    };

    Some(Point::new(x, y))
}
