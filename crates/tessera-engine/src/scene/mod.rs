//! Scene description types.
//!
//! Responsibilities:
//! - describe shapes as immutable value records in world units
//! - keep paint order explicit (insertion order, no z-buffer)

mod list;
mod shape;

pub use list::Scene;
pub use shape::{Shape, ShapeKind, Stroke, StrokePosition};
