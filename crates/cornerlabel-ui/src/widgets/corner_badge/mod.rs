//! Triangular corner badge ("NEW", "SALE") pinned to one corner of a square surface.
//!
//! One badge outline and one label placement are defined for the canonical
//! orientation; the four corners are reached by rotating the coordinate frame
//! in quarter turns around the surface centre. See [`BadgeGeometry`].

mod geometry;
mod position;
mod style;

pub use geometry::BadgeGeometry;
pub use position::CornerPosition;
pub use style::{BadgeConfig, BadgeStyle, DEFAULT_SIDE_LENGTH_DP, DEFAULT_TEXT_SIZE_SP};

use cornerlabel_engine::coords::{Rect, Vec2};
use cornerlabel_engine::paint::Color;
use cornerlabel_engine::text::{FontId, TextMeasure};

use crate::constraints::{square_footprint, Constraints, LayoutCtx};
use crate::invalidate::RedrawHandle;
use crate::metrics::DisplayMetrics;
use crate::painter::Painter;
use crate::resources::{ResourceError, ResourceId, ResourceResolver};
use crate::widget::Widget;

/// A corner badge.
///
/// # Example
/// ```rust,ignore
/// CornerBadge::new()
///     .position(CornerPosition::TopRight)
///     .side_length(48.0)
///     .text("SALE")
///     .font(font)
///     .bg_color(Color::from_argb_u32(0xffe53935))
/// ```
#[derive(Debug, Clone)]
pub struct CornerBadge {
    style: BadgeStyle,
    /// Half the width of the host surface; updated by `on_resize` only.
    half_extent: f32,
    redraw: RedrawHandle,
}

impl CornerBadge {
    pub fn new() -> Self {
        Self::with_metrics(DisplayMetrics::default())
    }

    /// A badge whose default side length and text size follow `metrics`.
    pub fn with_metrics(metrics: DisplayMetrics) -> Self {
        Self { style: BadgeStyle::new(metrics), half_extent: 0.0, redraw: RedrawHandle::new() }
    }

    // ── construction-time builders ────────────────────────────────────────

    pub fn position(mut self, v: CornerPosition) -> Self { self.style.position = v; self }
    pub fn side_length(mut self, v: f32) -> Self { self.style.side_length = v; self }
    pub fn text(mut self, v: impl Into<String>) -> Self { self.style.text = v.into(); self }
    pub fn font(mut self, v: FontId) -> Self { self.style.font = v; self }
    pub fn text_size(mut self, v: f32) -> Self { self.style.text_size = v; self }
    pub fn text_color(mut self, v: Color) -> Self { self.style.text_color = v; self }
    pub fn bg_color(mut self, v: Color) -> Self { self.style.bg_color = v; self }
    pub fn margin_lean_side(mut self, v: f32) -> Self { self.style.margin_lean_side = v; self }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn style(&self) -> &BadgeStyle {
        &self.style
    }

    #[inline]
    pub fn surface_half_extent(&self) -> f32 {
        self.half_extent
    }

    /// A handle sharing this badge's redraw flag.
    pub fn redraw_handle(&self) -> RedrawHandle {
        self.redraw.clone()
    }

    // ── runtime mutation ──────────────────────────────────────────────────

    /// Replaces the style fields present in `config` and requests a redraw.
    pub fn configure(&mut self, config: BadgeConfig) -> &mut Self {
        config.apply(&mut self.style);
        self.invalidate()
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.style.text = text.into();
        self.invalidate()
    }

    pub fn set_bg_color(&mut self, color: Color) -> &mut Self {
        self.style.bg_color = color;
        self.invalidate()
    }

    pub fn set_text_color(&mut self, color: Color) -> &mut Self {
        self.style.text_color = color;
        self.invalidate()
    }

    /// Looks the text up by resource id. A failed lookup leaves the badge untouched.
    pub fn set_text_id(
        &mut self,
        id: ResourceId,
        resources: &dyn ResourceResolver,
    ) -> Result<&mut Self, ResourceError> {
        let text = resources.string(id)?;
        Ok(self.set_text(text))
    }

    pub fn set_bg_color_id(
        &mut self,
        id: ResourceId,
        resources: &dyn ResourceResolver,
    ) -> Result<&mut Self, ResourceError> {
        let color = resources.color(id)?;
        Ok(self.set_bg_color(color))
    }

    pub fn set_text_color_id(
        &mut self,
        id: ResourceId,
        resources: &dyn ResourceResolver,
    ) -> Result<&mut Self, ResourceError> {
        let color = resources.color(id)?;
        Ok(self.set_text_color(color))
    }

    fn invalidate(&mut self) -> &mut Self {
        self.redraw.request();
        self
    }

    // ── geometry ──────────────────────────────────────────────────────────

    /// Geometry the next paint will use, measured with `text`.
    pub fn geometry(&self, text: &dyn TextMeasure) -> BadgeGeometry {
        let s = &self.style;
        let metrics = text.measure(&s.text, s.font, s.text_size);
        BadgeGeometry::compute(s.position, s.side_length, self.half_extent, metrics)
    }
}

impl Default for CornerBadge {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for CornerBadge {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        square_footprint(constraints.width_spec(), constraints.height_spec(), self.style.side_length)
    }

    fn on_resize(&mut self, size: Vec2) {
        self.half_extent = size.x.max(0.0) / 2.0;
        log::trace!("CornerBadge: surface half extent now {}", self.half_extent);
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let s = &self.style;
        let metrics = painter.measure_text(&s.text, s.font, s.text_size);
        let g = BadgeGeometry::compute(s.position, s.side_length, self.half_extent, metrics);

        painter.save();
        painter.translate(rect.origin.x, rect.origin.y);
        painter.concat(g.triangle_frame);
        painter.fill_path(&g.triangle, s.bg_color);
        painter.restore();

        painter.save();
        painter.translate(rect.origin.x, rect.origin.y);
        painter.concat(g.text_frame);
        painter.text(&s.text, s.font, s.text_size, s.text_color, g.text_origin);
        painter.restore();
    }

    fn attach_redraw(&mut self, handle: RedrawHandle) {
        self.redraw = handle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cornerlabel_engine::coords::Affine;
    use cornerlabel_engine::scene::{DrawCmd, DrawList};
    use cornerlabel_engine::text::TextMetrics;

    use crate::resources::{ResourceKind, ResourceTable};

    /// Every glyph is 6px wide; ascent 10, descent 3.
    struct Monospace;
    impl TextMeasure for Monospace {
        fn measure(&self, text: &str, _: FontId, _: f32) -> TextMetrics {
            TextMetrics { width: 6.0 * text.chars().count() as f32, ascent: 10.0, descent: 3.0 }
        }
    }

    fn ctx() -> LayoutCtx<'static> {
        LayoutCtx { text: &Monospace }
    }

    fn sized(badge: CornerBadge, extent: f32) -> CornerBadge {
        let mut badge = badge;
        badge.on_resize(Vec2::splat(extent));
        badge
    }

    fn paint(badge: &CornerBadge, extent: f32) -> DrawList {
        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list, &Monospace);
        badge.paint(&mut painter, Rect::new(0.0, 0.0, extent, extent));
        list
    }

    // ── sizing ────────────────────────────────────────────────────────────

    #[test]
    fn measure_shrink_to_fit_requests_double_side() {
        let badge = CornerBadge::new().side_length(40.0);
        let size = badge.measure(Constraints::loose(Vec2::splat(400.0)), &ctx());
        assert_eq!(size, Vec2::new(80.0, 80.0));
    }

    #[test]
    fn measure_width_at_most_height_fixed() {
        let badge = CornerBadge::new();
        let c = Constraints::between(Vec2::new(0.0, 100.0), Vec2::new(300.0, 100.0));
        assert_eq!(badge.measure(c, &ctx()), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn measure_fixed_unequal_takes_smaller() {
        let badge = CornerBadge::new();
        let c = Constraints::tight(Vec2::new(150.0, 200.0));
        assert_eq!(badge.measure(c, &ctx()), Vec2::new(150.0, 150.0));
    }

    #[test]
    fn measure_fixed_equal_accepted() {
        let badge = CornerBadge::new();
        let c = Constraints::tight(Vec2::splat(120.0));
        assert_eq!(badge.measure(c, &ctx()), Vec2::new(120.0, 120.0));
    }

    #[test]
    fn default_side_length_follows_density() {
        let badge = CornerBadge::with_metrics(DisplayMetrics::with_density(3.0));
        let size = badge.measure(Constraints::unbounded(), &ctx());
        assert_eq!(size, Vec2::splat(240.0));
    }

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn resize_halves_width_without_requesting_redraw() {
        let mut badge = CornerBadge::new();
        let handle = badge.redraw_handle();
        badge.on_resize(Vec2::new(90.0, 90.0));
        assert_eq!(badge.surface_half_extent(), 45.0);
        assert!(!handle.is_requested());
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn paint_records_badge_then_label() {
        let badge = sized(CornerBadge::new().text("NEW"), 100.0);
        let list = paint(&badge, 100.0);
        assert_eq!(list.len(), 2);
        assert!(matches!(list.items()[0], DrawCmd::FillPath(_)));
        match &list.items()[1] {
            DrawCmd::Text(t) => {
                assert_eq!(t.text, "NEW");
                assert_eq!(t.origin.x, -9.0);
                assert_eq!(t.color, Color::white());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn paint_is_idempotent() {
        let badge = sized(CornerBadge::new().position(CornerPosition::BottomRight).text("SALE"), 80.0);
        let first = paint(&badge, 80.0);
        let second = paint(&badge, 80.0);
        assert_eq!(first.items(), second.items());
    }

    #[test]
    fn repaint_into_cleared_list_does_not_accumulate() {
        let badge = sized(CornerBadge::new().text("NEW"), 80.0);
        let mut list = DrawList::new();
        for _ in 0..3 {
            list.clear();
            let mut painter = Painter::new(&mut list, &Monospace);
            badge.paint(&mut painter, Rect::new(0.0, 0.0, 80.0, 80.0));
        }
        let DrawCmd::FillPath(fill) = &list.items()[0] else { panic!("expected fill") };
        assert_eq!(list.len(), 2);
        assert_eq!(fill.path.points().len(), 4);
    }

    #[test]
    fn paint_clamps_oversized_leg_without_mutating_style() {
        let h = 20.0;
        let badge = sized(CornerBadge::new().side_length(5.0 * h), 2.0 * h);
        let list = paint(&badge, 2.0 * h);
        let DrawCmd::FillPath(fill) = &list.items()[0] else { panic!("expected fill") };
        // Top-left: the second vertex sits a full surface width along the top edge.
        assert!(fill.path.points()[1].approx_eq(Vec2::new(2.0 * h, 0.0), 1e-4));
        assert_eq!(badge.style().side_length, 5.0 * h);
    }

    #[test]
    fn paint_offsets_by_rect_origin() {
        let badge = sized(CornerBadge::new().side_length(10.0), 40.0);
        let mut list = DrawList::new();
        {
            let mut painter = Painter::new(&mut list, &Monospace);
            badge.paint(&mut painter, Rect::new(7.0, 9.0, 40.0, 40.0));
            assert_eq!(painter.transform(), Affine::IDENTITY);
        }
        let DrawCmd::FillPath(fill) = &list.items()[0] else { panic!("expected fill") };
        assert!(fill.path.points()[0].approx_eq(Vec2::new(7.0, 9.0), 1e-4));
    }

    #[test]
    fn empty_text_still_draws() {
        let badge = sized(CornerBadge::new(), 80.0);
        let list = paint(&badge, 80.0);
        let DrawCmd::Text(t) = &list.items()[1] else { panic!("expected text") };
        assert!(t.text.is_empty());
        assert_eq!(t.origin.x, 0.0);
    }

    #[test]
    fn geometry_matches_painted_text_frame() {
        let badge = sized(CornerBadge::new().position(CornerPosition::TopRight).text("HOT"), 100.0);
        let g = badge.geometry(&Monospace);
        let list = paint(&badge, 100.0);
        let DrawCmd::Text(t) = &list.items()[1] else { panic!("expected text") };
        assert!(t.transform.approx_eq(g.text_frame, 1e-5));
        assert_eq!(t.origin, g.text_origin);
    }

    // ── setters ───────────────────────────────────────────────────────────

    #[test]
    fn setters_chain_and_request_redraw() {
        let mut badge = CornerBadge::new();
        let handle = badge.redraw_handle();
        badge.set_text("SALE").set_bg_color(Color::white()).set_text_color(Color::red());
        assert!(handle.take());
        assert_eq!(badge.style().text, "SALE");
        assert_eq!(badge.style().bg_color, Color::white());
        assert_eq!(badge.style().text_color, Color::red());
    }

    #[test]
    fn attached_handle_receives_requests() {
        let mut badge = CornerBadge::new();
        let host = RedrawHandle::new();
        badge.attach_redraw(host.clone());
        badge.set_text("x");
        assert!(host.is_requested());
    }

    #[test]
    fn configure_applies_and_invalidates() {
        let mut badge = CornerBadge::new();
        let handle = badge.redraw_handle();
        badge.configure(BadgeConfig {
            text: Some("NEW".into()),
            bg_color: Some(Color::white()),
            ..BadgeConfig::new(CornerPosition::BottomLeft)
        });
        assert!(handle.is_requested());
        assert_eq!(badge.style().position, CornerPosition::BottomLeft);
        assert_eq!(badge.style().text, "NEW");
        assert_eq!(badge.style().side_length, DEFAULT_SIDE_LENGTH_DP);
    }

    #[test]
    fn resource_setters_resolve_ids() {
        let table = ResourceTable::new()
            .with_color("brand", Color::from_argb_u32(0xff336699))
            .with_string("hot", "HOT");
        let color_id = table.lookup(ResourceKind::Color, "brand").unwrap();
        let text_id = table.lookup(ResourceKind::String, "hot").unwrap();

        let mut badge = CornerBadge::new();
        badge.set_bg_color_id(color_id, &table).unwrap();
        badge.set_text_color_id(color_id, &table).unwrap();
        badge.set_text_id(text_id, &table).unwrap();
        assert_eq!(badge.style().bg_color, Color::from_argb_u32(0xff336699));
        assert_eq!(badge.style().text, "HOT");
    }

    #[test]
    fn failed_resource_lookup_propagates_and_keeps_style() {
        let table = ResourceTable::new();
        let mut badge = CornerBadge::new();
        let handle = badge.redraw_handle();
        assert!(badge.set_bg_color_id(42, &table).is_err());
        assert!(badge.set_text_id(42, &table).is_err());
        assert_eq!(badge.style().bg_color, Color::red());
        assert!(!handle.is_requested());
    }
}
