use crate::coords::{Affine, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontId;

/// Text draw payload.
///
/// Unlike filled paths, text is recorded in its local frame together with the
/// transform that places it, so rotated labels rasterize without resampling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in pixels.
    pub size: f32,
    pub color: Color,
    /// Left end of the baseline, in the local frame.
    pub origin: Vec2,
    /// Local-to-device transform at the time the text was recorded.
    pub transform: Affine,
}

impl DrawList {
    /// Records a single line of text.
    pub fn push_text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
        transform: Affine,
    ) {
        self.push(DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            size,
            color,
            origin,
            transform,
        }));
    }
}
