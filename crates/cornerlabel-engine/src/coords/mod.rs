//! Coordinate and geometry types shared by the widget layer and the rasterizer.
//!
//! Canonical CPU space:
//! - Device pixels
//! - Origin top-left
//! - +X right, +Y down (positive rotations turn clockwise on screen)

mod affine;
mod rect;
mod vec2;

pub use affine::Affine;
pub use rect::Rect;
pub use vec2::Vec2;
