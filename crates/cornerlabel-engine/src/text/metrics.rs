use super::FontId;

/// Horizontal extent and vertical line metrics of a single line of text.
///
/// `ascent` and `descent` are both positive distances from the baseline
/// (up and down respectively).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl TextMetrics {
    /// Distance between the top of the ascent and the bottom of the descent.
    #[inline]
    pub fn height(self) -> f32 {
        self.ascent + self.descent
    }
}

/// Anything that can measure a single line of text.
///
/// Widgets measure through this trait rather than a concrete font system so
/// layout can be exercised with fixed metrics.
pub trait TextMeasure {
    fn measure(&self, text: &str, font: FontId, size: f32) -> TextMetrics;
}
