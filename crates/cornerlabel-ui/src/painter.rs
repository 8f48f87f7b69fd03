use cornerlabel_engine::coords::{Affine, Vec2};
use cornerlabel_engine::paint::Color;
use cornerlabel_engine::path::Path;
use cornerlabel_engine::scene::DrawList;
use cornerlabel_engine::text::{FontId, TextMeasure, TextMetrics};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a canvas-style API: a current transform
/// that `translate` / `rotate_degrees` / `scale` modify in the local frame, and
/// a `save` / `restore` stack around it.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    text: &'a dyn TextMeasure,
    transform: Affine,
    stack: Vec<Affine>,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, text: &'a dyn TextMeasure) -> Self {
        Self { draw_list, text, transform: Affine::IDENTITY, stack: Vec::new() }
    }

    // ── transform ─────────────────────────────────────────────────────────

    /// The current local-to-device transform.
    #[inline]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Pushes the current transform. Must be paired with [`restore`](Self::restore).
    pub fn save(&mut self) {
        self.stack.push(self.transform);
    }

    /// Pops the transform pushed by the matching [`save`](Self::save).
    pub fn restore(&mut self) {
        debug_assert!(!self.stack.is_empty(), "restore called without matching save");
        self.transform = self.stack.pop().unwrap_or(Affine::IDENTITY);
    }

    pub fn translate(&mut self, tx: f32, ty: f32) {
        self.transform = self.transform.translate(tx, ty);
    }

    pub fn rotate_degrees(&mut self, degrees: f32) {
        self.transform = self.transform.rotate_degrees(degrees);
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.transform = self.transform.scale(sx, sy);
    }

    /// Post-multiplies `m` onto the current transform.
    pub fn concat(&mut self, m: Affine) {
        self.transform = self.transform.concat(m);
    }

    // ── text measurement ──────────────────────────────────────────────────

    pub fn measure_text(&self, text: &str, font: FontId, size: f32) -> TextMetrics {
        self.text.measure(text, font, size)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Fills `path` (given in the local frame) with a solid color.
    pub fn fill_path(&mut self, path: &Path, color: Color) {
        self.draw_list.push_fill_path(path.transformed(self.transform), color);
    }

    /// Draws one line of text whose baseline starts at `origin` in the local frame.
    pub fn text(&mut self, text: &str, font: FontId, size: f32, color: Color, origin: Vec2) {
        self.draw_list.push_text(text, font, size, color, origin, self.transform);
    }
}
