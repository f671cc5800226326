//! Coordinate and geometry types shared by the preprocessor and compositor.
//!
//! World space:
//! - Origin at the canvas center
//! - +X right, +Y down
//! - The smaller canvas dimension spans exactly 10 world units
//!
//! Shape sizes and positions are expressed in world units; stroke widths and
//! the anti-aliasing band are expressed in screen pixels and converted here.

mod aabb;
mod canvas;
mod vec2;

pub use aabb::Aabb;
pub use canvas::{Canvas, MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, WORLD_SPAN, world_coord};
pub use vec2::Vec2;
