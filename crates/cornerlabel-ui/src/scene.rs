use cornerlabel_engine::coords::{Rect, Vec2};
use cornerlabel_engine::scene::DrawList;
use cornerlabel_engine::text::TextMeasure;

use crate::constraints::{Constraints, LayoutCtx};
use crate::invalidate::RedrawHandle;
use crate::painter::Painter;
use crate::widget::Widget;

/// Drives one widget through the host cycle: measure, resize, paint.
///
/// Owns the `DrawList` the widget records into; it is cleared at the start of
/// every paint so nothing carries over between frames.
///
/// # Example
///
/// ```rust,ignore
/// let mut scene = UiScene::new(CornerBadge::new().text("NEW").font(font));
/// let list = scene.frame(Constraints::tight(Vec2::splat(96.0)), &fonts);
/// let pixmap = Rasterizer::new(&fonts).render(list, 96, 96)?;
///
/// scene.widget_mut().set_text("SALE");
/// assert!(scene.needs_redraw());
/// ```
pub struct UiScene<W: Widget> {
    root: W,
    /// Draw list populated by the most recent paint.
    pub draw_list: DrawList,
    size: Option<Vec2>,
    redraw: RedrawHandle,
}

impl<W: Widget> UiScene<W> {
    pub fn new(mut root: W) -> Self {
        let redraw = RedrawHandle::new();
        root.attach_redraw(redraw.clone());
        // The first frame always paints.
        redraw.request();
        Self { root, draw_list: DrawList::new(), size: None, redraw }
    }

    #[inline]
    pub fn widget(&self) -> &W {
        &self.root
    }

    /// Mutable access for style changes; setters raise the redraw flag.
    #[inline]
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.root
    }

    /// Size granted at the last layout, if any.
    #[inline]
    pub fn size(&self) -> Option<Vec2> {
        self.size
    }

    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.redraw.is_requested()
    }

    /// Measures the widget and grants it the size it asked for.
    ///
    /// `on_resize` fires only when the granted size differs from the last one.
    pub fn layout(&mut self, constraints: Constraints, text: &dyn TextMeasure) -> Vec2 {
        let ctx = LayoutCtx { text };
        let size = self.root.measure(constraints, &ctx);
        if self.size != Some(size) {
            log::debug!("UiScene: size changed {:?} -> {:?}", self.size, size);
            self.root.on_resize(size);
            self.size = Some(size);
            self.redraw.request();
        }
        size
    }

    /// Records a fresh frame at the last laid-out size and clears the redraw flag.
    pub fn paint(&mut self, text: &dyn TextMeasure) -> &DrawList {
        let size = self.size.unwrap_or_else(|| {
            log::warn!("UiScene: paint before layout, drawing at zero size");
            Vec2::zero()
        });

        self.draw_list.clear();
        {
            let mut painter = Painter::new(&mut self.draw_list, text);
            self.root.paint(&mut painter, Rect::from_origin_size(Vec2::zero(), size));
        }
        self.redraw.take();
        &self.draw_list
    }

    /// [`layout`](Self::layout) followed by [`paint`](Self::paint).
    pub fn frame(&mut self, constraints: Constraints, text: &dyn TextMeasure) -> &DrawList {
        self.layout(constraints, text);
        self.paint(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cornerlabel_engine::paint::Color;
    use cornerlabel_engine::scene::DrawCmd;
    use cornerlabel_engine::text::{FontId, TextMetrics};

    use crate::widgets::corner_badge::{CornerBadge, CornerPosition};

    struct Fixed;
    impl TextMeasure for Fixed {
        fn measure(&self, text: &str, _: FontId, _: f32) -> TextMetrics {
            TextMetrics { width: 5.0 * text.len() as f32, ascent: 8.0, descent: 2.0 }
        }
    }

    #[test]
    fn first_frame_is_requested() {
        let scene = UiScene::new(CornerBadge::new());
        assert!(scene.needs_redraw());
    }

    #[test]
    fn frame_sizes_and_clears_redraw() {
        let mut scene = UiScene::new(CornerBadge::new().side_length(40.0).text("NEW"));
        let list = scene.frame(Constraints::unbounded(), &Fixed);
        assert_eq!(list.len(), 2);
        assert_eq!(scene.size(), Some(Vec2::splat(80.0)));
        assert_eq!(scene.widget().surface_half_extent(), 40.0);
        assert!(!scene.needs_redraw());
    }

    #[test]
    fn setters_through_scene_request_redraw() {
        let mut scene = UiScene::new(CornerBadge::new());
        scene.frame(Constraints::tight(Vec2::splat(64.0)), &Fixed);
        scene.widget_mut().set_bg_color(Color::white());
        assert!(scene.needs_redraw());
    }

    #[test]
    fn unchanged_size_does_not_request_redraw() {
        let mut scene = UiScene::new(CornerBadge::new());
        let c = Constraints::tight(Vec2::splat(64.0));
        scene.frame(c, &Fixed);
        scene.layout(c, &Fixed);
        assert!(!scene.needs_redraw());
    }

    #[test]
    fn resize_recomputes_geometry() {
        let mut scene = UiScene::new(CornerBadge::new().position(CornerPosition::BottomLeft));
        scene.frame(Constraints::tight(Vec2::splat(100.0)), &Fixed);
        scene.frame(Constraints::tight(Vec2::splat(60.0)), &Fixed);
        assert_eq!(scene.widget().surface_half_extent(), 30.0);

        let DrawCmd::FillPath(fill) = &scene.draw_list.items()[0] else {
            panic!("expected fill")
        };
        // Bottom-left corner of the 60px surface.
        assert!(fill.path.points()[0].approx_eq(Vec2::new(0.0, 60.0), 1e-4));
    }

    #[test]
    fn repeated_frames_are_identical() {
        let mut scene = UiScene::new(CornerBadge::new().text("SALE"));
        let c = Constraints::tight(Vec2::splat(72.0));
        let first = scene.frame(c, &Fixed).items().to_vec();
        let second = scene.frame(c, &Fixed).items().to_vec();
        assert_eq!(first, second);
    }
}
