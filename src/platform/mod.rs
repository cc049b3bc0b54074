//! Platform seam
//!
//! The orchestrator only talks to windows and displays through the traits in
//! this module. A Win32 implementation lives in [`win32`]; tests use
//! in-memory fakes.

pub mod screen;
pub mod window;

#[cfg(windows)]
pub mod win32;

pub use screen::{ScreenDescriptor, ScreenResolver};
pub use window::{Attribute, PlatformError, WindowHandle, WindowProvider};
