//! Application orchestration layer
//!
//! This module coordinates between the domain geometry, the platform seam
//! and user preferences for a single resize command.

pub mod resizer;

pub use resizer::{CompletionCallback, ResizeError, ResizeOutcome, Resizer, FRAME_TOLERANCE};
