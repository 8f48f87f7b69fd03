//! Paint model shared between the widget layer and the rasterizer.
//!
//! Badges only ever fill with solid colors, so the paint model is the color
//! type alone. Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
