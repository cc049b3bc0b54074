//! Asymmetric padding
//!
//! Edges that touch the usable screen frame are inset by the full gap,
//! internal edges by half of it. Two windows tiled side by side each give
//! up half a gap on the shared edge, so every visible gap has the same width.

use crate::domain::core::{Edge, Rect};
use crate::domain::direction::Direction;

/// Insets `rect` on all four edges according to `direction`'s touching edges
pub fn apply_padding(rect: Rect, direction: Direction, padding: f64) -> Rect {
    let touching = direction.touching_edges();

    Edge::ALL.iter().fold(rect, |acc, &edge| {
        let amount = if touching.touches(edge) {
            padding
        } else {
            padding / 2.0
        };
        acc.inset(edge, amount)
    })
}
