use super::Vec2;

/// Axis-aligned rectangle in device pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Closed containment with tolerance: [min - eps, max + eps].
    ///
    /// Badge vertices sit exactly on the surface edge, so the check has to be
    /// inclusive on both sides.
    #[inline]
    pub fn contains_approx(self, p: Vec2, eps: f32) -> bool {
        let max = self.origin + self.size;
        p.x >= self.origin.x - eps
            && p.y >= self.origin.y - eps
            && p.x <= max.x + eps
            && p.y <= max.y + eps
    }
}
