//! Window handle capability set
//!
//! A window handle exposes its position, size and fullscreen flag. Getters
//! return a `Result` rather than a zero default so a failed platform call is
//! never mistaken for a zero-sized window.

use thiserror::Error;

use crate::domain::core::{Point, Rect, Size};

/// Window attribute touched by a platform call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Position,
    Size,
    Fullscreen,
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Attribute::Position => write!(f, "position"),
            Attribute::Size => write!(f, "size"),
            Attribute::Fullscreen => write!(f, "fullscreen"),
        }
    }
}

/// Error types for window operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("failed to read window {0}")]
    Read(Attribute),
    #[error("platform refused to write window {0}")]
    Write(Attribute),
    #[error("window handle is no longer valid")]
    InvalidHandle,
}

/// A live on-screen window
///
/// Implementations do not own the window; dropping a handle never closes it.
pub trait WindowHandle {
    fn position(&self) -> Result<Point, PlatformError>;
    fn set_position(&mut self, position: Point) -> Result<(), PlatformError>;

    fn size(&self) -> Result<Size, PlatformError>;
    fn set_size(&mut self, size: Size) -> Result<(), PlatformError>;

    fn is_fullscreen(&self) -> Result<bool, PlatformError>;
    fn set_fullscreen(&mut self, fullscreen: bool) -> Result<(), PlatformError>;

    /// Reads position and size as one rectangle
    fn frame(&self) -> Result<Rect, PlatformError> {
        Ok(Rect::from_parts(self.position()?, self.size()?))
    }
}

/// Resolves the window that keyboard commands should act on
pub trait WindowProvider {
    type Window: WindowHandle;

    /// Returns the focused standard window, or `None` if there is no eligible one
    fn focused_window(&self) -> Option<Self::Window>;
}
