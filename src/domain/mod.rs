//! Domain logic and core data structures
//!
//! This module contains pure geometry that is independent of any
//! windowing API and of the platform binding layer.

pub mod core;
pub mod correction;
pub mod direction;
pub mod frame;
pub mod padding;
