use cornerlabel_engine::paint::Color;
use cornerlabel_engine::text::FontId;

use crate::metrics::DisplayMetrics;

use super::CornerPosition;

/// Default leg length in `dp`.
pub const DEFAULT_SIDE_LENGTH_DP: f32 = 40.0;
/// Default label size in `sp`.
pub const DEFAULT_TEXT_SIZE_SP: f32 = 14.0;

/// Visual state of a badge. Geometry is derived from it on every paint.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeStyle {
    pub position: CornerPosition,
    /// Leg length in device pixels before clamping to the surface.
    pub side_length: f32,
    pub text: String,
    pub font: FontId,
    pub text_size: f32,
    pub text_color: Color,
    pub bg_color: Color,
    /// Parsed and stored only; the draw path does not read it.
    pub margin_lean_side: f32,
}

impl BadgeStyle {
    pub fn new(metrics: DisplayMetrics) -> Self {
        Self {
            position: CornerPosition::TopLeft,
            side_length: metrics.dp(DEFAULT_SIDE_LENGTH_DP),
            text: String::new(),
            font: FontId::default(),
            text_size: metrics.sp(DEFAULT_TEXT_SIZE_SP),
            text_color: Color::white(),
            bg_color: Color::red(),
            margin_lean_side: 0.0,
        }
    }
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self::new(DisplayMetrics::default())
    }
}

/// Input to [`CornerBadge::configure`](super::CornerBadge::configure).
///
/// `position` is always applied; `None` fields leave the current value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BadgeConfig {
    pub position: CornerPosition,
    pub side_length: Option<f32>,
    pub text_size: Option<f32>,
    pub text_color: Option<Color>,
    pub bg_color: Option<Color>,
    pub margin_lean_side: Option<f32>,
    pub text: Option<String>,
}

impl BadgeConfig {
    pub fn new(position: CornerPosition) -> Self {
        Self { position, ..Self::default() }
    }

    /// Applies the set fields onto `style`.
    pub(crate) fn apply(self, style: &mut BadgeStyle) {
        style.position = self.position;
        if let Some(v) = self.side_length { style.side_length = v; }
        if let Some(v) = self.text_size { style.text_size = v; }
        if let Some(v) = self.text_color { style.text_color = v; }
        if let Some(v) = self.bg_color { style.bg_color = v; }
        if let Some(v) = self.margin_lean_side { style.margin_lean_side = v; }
        if let Some(v) = self.text { style.text = v; }
    }
}
