use cornerlabel_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::invalidate::RedrawHandle;
use crate::painter::Painter;

/// The contract between a hosted widget and its host's layout/draw cycle.
///
/// The host calls, in order: [`measure`](Self::measure) to negotiate a size,
/// [`on_resize`](Self::on_resize) whenever the granted size changes, and
/// [`paint`](Self::paint) whenever a frame is drawn.
pub trait Widget: 'static {
    /// Compute the size this widget wants given the host's constraints.
    ///
    /// Must be deterministic.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Notification that the host granted `size`. Pure state update, no drawing.
    fn on_resize(&mut self, _size: Vec2) {}

    /// Draw this widget into `painter` within `rect`.
    ///
    /// Repeated calls with unchanged state must record identical commands.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Hands the widget the flag it raises when its state changes visually.
    fn attach_redraw(&mut self, _handle: RedrawHandle) {}
}
