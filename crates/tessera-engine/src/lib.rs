//! Tessera engine crate.
//!
//! Rasterizes scenes of circles, squares and triangles placed in a continuous
//! world space into a small grid of half-block terminal cells.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Vec2`, `Aabb`, `Canvas` (pixel ↔ world mapping) |
//! | [`paint`] | `Color`, `Premul`, `Pattern`, `Background` |
//! | [`scene`] | `Shape`, `ShapeKind`, `Stroke`, `Scene` |
//! | [`render`] | distance functions, preprocessor, compositor, `render` entry points |
//! | [`encode`] | `ColorDepth`, cell encoding |
//! | [`logging`] | `init_logging` |
//!
//! # Quick start
//!
//! ```rust
//! use tessera_engine::coords::{Canvas, Vec2};
//! use tessera_engine::encode::ColorDepth;
//! use tessera_engine::paint::{Background, Color, Pattern};
//! use tessera_engine::scene::Shape;
//!
//! let bg = Background::new(Color::BLACK, Color::rgb(20, 20, 20), Pattern::Breton);
//! let shapes = [Shape::circle(3.0, Vec2::zero(), Color::rgb(255, 200, 0))];
//! let text = tessera_engine::render(Canvas::new(20, 10), &bg, &shapes, ColorDepth::Monochrome);
//! assert_eq!(text.lines().count(), 5);
//! ```

pub mod coords;
pub mod encode;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;

pub use render::{RenderConfig, render, render_scene, render_with};
