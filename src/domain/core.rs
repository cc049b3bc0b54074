//! Core domain types and operations
//!
//! This module defines pure geometry types shared by the frame generator,
//! the padding applicator and the corrector. Nothing here knows about a
//! platform: all coordinates live in one global desktop space where y grows
//! downward from the top-left corner of the primary display.

use bitflags::bitflags;

/// A position in global desktop coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One side of a rectangle
///
/// `Leading` is the left side and `Trailing` the right side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Leading,
    Trailing,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Leading, Edge::Trailing];
}

bitflags! {
    /// Set of rectangle edges
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEADING = 1 << 2;
        const TRAILING = 1 << 3;
    }
}

impl Edges {
    /// Returns true if the set contains the given edge
    pub fn touches(self, edge: Edge) -> bool {
        self.contains(Edges::from(edge))
    }
}

impl From<Edge> for Edges {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::Top => Edges::TOP,
            Edge::Bottom => Edges::BOTTOM,
            Edge::Leading => Edges::LEADING,
            Edge::Trailing => Edges::TRAILING,
        }
    }
}

/// Rectangle in global desktop coordinates
///
/// This is the fundamental building block for all geometric calculations.
/// Values are kept as raw `f64`; nothing in the domain layer rounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// Creates a new rectangle
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Builds a rectangle from an origin and a size
    pub fn from_parts(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    /// Returns the right edge coordinate
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Returns the bottom edge coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Returns a copy moved to `origin`, size unchanged
    pub fn with_origin(&self, origin: Point) -> Rect {
        Rect::new(origin.x, origin.y, self.w, self.h)
    }

    /// Shrinks the rectangle from one edge
    ///
    /// Insetting the top or leading edge moves the origin inward and shrinks
    /// the matching dimension. Insetting the bottom or trailing edge only
    /// shrinks the dimension. The amount is capped at the affected dimension,
    /// so the result never has a negative size.
    pub fn inset(&self, edge: Edge, amount: f64) -> Rect {
        let amount = match edge {
            Edge::Top | Edge::Bottom => amount.min(self.h),
            Edge::Leading | Edge::Trailing => amount.min(self.w),
        };
        match edge {
            Edge::Top => Rect::new(self.x, self.y + amount, self.w, self.h - amount),
            Edge::Bottom => Rect::new(self.x, self.y, self.w, self.h - amount),
            Edge::Leading => Rect::new(self.x + amount, self.y, self.w - amount, self.h),
            Edge::Trailing => Rect::new(self.x, self.y, self.w - amount, self.h),
        }
    }

    /// Returns the intersection of two rectangles, or None if they don't intersect
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if left < right && top < bottom {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }

    /// Compares every component within `eps`
    pub fn approx_eq(&self, other: &Rect, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps
            && (self.y - other.y).abs() <= eps
            && (self.w - other.w).abs() <= eps
            && (self.h - other.h).abs() <= eps
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1}, {:.1}x{:.1})", self.x, self.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_basic_properties() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
        assert_eq!(rect.origin(), Point::new(10.0, 20.0));
        assert_eq!(rect.size(), Size::new(100.0, 50.0));
        assert_eq!(Rect::from_parts(rect.origin(), rect.size()), rect);
    }

    #[test]
    fn inset_leading_edges_move_origin() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(rect.inset(Edge::Top, 10.0), Rect::new(0.0, 10.0, 100.0, 90.0));
        assert_eq!(rect.inset(Edge::Leading, 10.0), Rect::new(10.0, 0.0, 90.0, 100.0));
    }

    #[test]
    fn inset_trailing_edges_keep_origin() {
        let rect = Rect::new(5.0, 5.0, 100.0, 100.0);
        assert_eq!(rect.inset(Edge::Bottom, 10.0), Rect::new(5.0, 5.0, 100.0, 90.0));
        assert_eq!(rect.inset(Edge::Trailing, 10.0), Rect::new(5.0, 5.0, 90.0, 100.0));
    }

    #[test]
    fn inset_never_goes_negative() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(rect.inset(Edge::Top, 80.0), Rect::new(0.0, 50.0, 100.0, 0.0));
        assert_eq!(rect.inset(Edge::Trailing, 150.0), Rect::new(0.0, 0.0, 0.0, 50.0));
        assert_eq!(
            rect.inset(Edge::Leading, 150.0).inset(Edge::Trailing, 10.0),
            Rect::new(100.0, 0.0, 0.0, 50.0)
        );
    }

    #[test]
    fn rect_intersection() {
        let rect1 = Rect::new(0.0, 0.0, 20.0, 20.0);
        let rect2 = Rect::new(10.0, 10.0, 20.0, 20.0);
        let intersection = rect1.intersection(&rect2).unwrap();
        assert_eq!(intersection, Rect::new(10.0, 10.0, 10.0, 10.0));

        // No intersection
        let rect3 = Rect::new(30.0, 30.0, 10.0, 10.0);
        assert!(rect1.intersection(&rect3).is_none());
    }

    #[test]
    fn approx_eq_tolerance() {
        let a = Rect::new(0.0, 0.0, 633.333, 400.0);
        let b = Rect::new(0.0, 0.0, 633.0, 400.0);
        assert!(a.approx_eq(&b, 1.0));
        assert!(!a.approx_eq(&b, 0.1));
    }

    #[test]
    fn edges_from_edge() {
        let edges = Edges::TOP | Edges::LEADING;
        assert!(edges.touches(Edge::Top));
        assert!(edges.touches(Edge::Leading));
        assert!(!edges.touches(Edge::Bottom));
        assert!(!edges.touches(Edge::Trailing));
    }
}
