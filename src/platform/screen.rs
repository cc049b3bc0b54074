//! Screen descriptors and active-screen resolution
//!
//! Coordinate contract: every rectangle handed to the core lives in one
//! global desktop space with y growing downward and the origin at the
//! top-left corner of the primary display. Secondary displays sit at
//! non-zero, possibly negative offsets. Binding layers are responsible for
//! converting native coordinates (e.g. y-up Cocoa frames) into this space
//! before building a [`ScreenDescriptor`].

use crate::domain::core::Rect;

/// One display as seen by the tiling engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenDescriptor {
    /// Full display rectangle
    pub frame: Rect,
    /// Area left after system chrome (taskbar, menu bar, dock)
    pub visible_frame: Rect,
}

impl ScreenDescriptor {
    pub fn new(frame: Rect, visible_frame: Rect) -> Self {
        Self {
            frame,
            visible_frame,
        }
    }

    /// Descriptor for a display without any reserved chrome
    pub fn full(frame: Rect) -> Self {
        Self::new(frame, frame)
    }

    /// Returns the area available for tiling
    ///
    /// This is the visible frame clipped to the display. Falls back to the
    /// full frame if the two do not overlap at all.
    pub fn usable_frame(&self) -> Rect {
        self.visible_frame
            .intersection(&self.frame)
            .unwrap_or(self.frame)
    }
}

/// Resolves the display the user is currently working on
pub trait ScreenResolver {
    fn screen_under_pointer(&self) -> Option<ScreenDescriptor>;
}
