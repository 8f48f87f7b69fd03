//! Cornerlabel engine crate.
//!
//! Owns the renderer-agnostic pieces the badge widget draws through:
//! geometry, paths, colors, the draw stream, text metrics and the CPU
//! rasterizer that turns a draw stream into pixels.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod path;
pub mod render;
pub mod scene;
pub mod text;
