//! CPU rasterization of a [`DrawList`](crate::scene::DrawList).
//!
//! Paths are filled through `tiny_skia` (re-exported by `resvg`); text is
//! drawn glyph by glyph from `fontdue` coverage bitmaps, each placed through
//! the transform recorded with its command.

mod error;
mod raster;

pub use error::RenderError;
pub use raster::{save_png, Rasterizer};

pub use resvg::tiny_skia::Pixmap;
