use std::fmt;

use super::{TextMeasure, TextMetrics};

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct FontId(pub usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The rasterizer borrows the system to
/// rasterize glyphs on demand.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?} ({} glyphs)", id, self.fonts[id.0].glyph_count());
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Pen advance of `text` on a single line, kerning included.
///
/// Shared with the rasterizer so measured widths match drawn glyph positions.
pub(crate) fn line_advance(font: &fontdue::Font, text: &str, size: f32) -> f32 {
    let mut pen = 0.0;
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        if let Some(p) = prev {
            pen += font.horizontal_kern(p, ch, size).unwrap_or(0.0);
        }
        pen += font.metrics(ch, size).advance_width;
        prev = Some(ch);
    }
    pen
}

impl TextMeasure for FontSystem {
    fn measure(&self, text: &str, font: FontId, size: f32) -> TextMetrics {
        let Some(f) = self.get(font) else {
            log::warn!("FontSystem: unknown FontId {:?}, using fallback metrics", font);
            return TextMetrics { width: 0.0, ascent: size * 0.8, descent: size * 0.2 };
        };

        let (ascent, descent) = match f.horizontal_line_metrics(size) {
            Some(lm) => (lm.ascent, -lm.descent),
            None => (size * 0.8, size * 0.2),
        };

        TextMetrics { width: line_advance(f, text, size), ascent, descent }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_font_uses_fallback_metrics() {
        let fonts = FontSystem::new();
        let m = fonts.measure("NEW", FontId(3), 10.0);
        assert_eq!(m.width, 0.0);
        assert_eq!(m.ascent, 8.0);
        assert_eq!(m.descent, 2.0);
        assert_eq!(m.height(), 10.0);
    }

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font(b"not a font").is_err());
        assert!(fonts.is_empty());
    }
}
