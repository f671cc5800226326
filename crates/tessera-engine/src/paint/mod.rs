//! Paint model shared between the scene and the compositor.
//!
//! Scope:
//! - opaque 8-bit colors stored in the pixel grid
//! - premultiplied accumulators used while compositing a single shape
//! - stripe patterns for backgrounds and shape fills

pub mod color;
pub mod pattern;

pub use color::{Color, Premul};
pub use pattern::{Background, Pattern};
