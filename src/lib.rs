//! snapwin: directional window tiling
//!
//! Computes target rectangles for windows from directional commands
//! (halves, quarters, thirds, maximize, center), applies edge-aware padding
//! and writes the result through a platform window handle, moving windows
//! back on screen when they refuse the requested size.

pub mod app;
pub mod config;
pub mod domain;
pub mod platform;

pub use app::{ResizeError, ResizeOutcome, Resizer};
pub use domain::core::{Point, Rect, Size};
pub use domain::direction::Direction;
pub use platform::{ScreenDescriptor, ScreenResolver, WindowHandle, WindowProvider};
