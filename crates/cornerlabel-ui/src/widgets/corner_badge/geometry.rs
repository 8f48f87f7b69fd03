use core::f32::consts::FRAC_1_SQRT_2;

use cornerlabel_engine::coords::{Affine, Vec2};
use cornerlabel_engine::path::Path;
use cornerlabel_engine::text::TextMetrics;

use super::CornerPosition;

/// Everything one paint of a badge needs, computed from scratch each time.
///
/// Both frames are relative to the top-left corner of the host surface.
/// The triangle is defined once for the canonical orientation and placed at
/// every corner purely by `triangle_frame`'s rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeGeometry {
    /// Leg length after clamping to the full surface width.
    pub leg: f32,
    /// Leg length after clamping to half the surface, used to fit the label.
    pub text_leg: f32,
    /// Centre translation followed by `position × 90°`.
    pub triangle_frame: Affine,
    /// Badge outline in `triangle_frame` coordinates.
    pub triangle: Path,
    /// `triangle_frame` rotated 45° onto the hypotenuse, point-reflected for
    /// corners whose label would otherwise read upside down.
    pub text_frame: Affine,
    /// Left end of the label baseline in `text_frame` coordinates.
    pub text_origin: Vec2,
    pub flipped: bool,
}

impl BadgeGeometry {
    pub fn compute(
        position: CornerPosition,
        side_length: f32,
        half_extent: f32,
        text: TextMetrics,
    ) -> Self {
        let h = half_extent;
        let triangle_frame = Affine::translation(h, h).rotate_degrees(position.rotation_degrees());

        let leg = side_length.min(2.0 * h).max(0.0);
        let triangle = Path::builder()
            .move_to(-h, -h)
            .line_to(leg - h, -h)
            .line_to(h, h - leg)
            .line_to(h, h)
            .close()
            .build();

        let text_leg = leg.min(h);
        // Perpendicular width of the band between the diagonal and the cut line.
        let lean = FRAC_1_SQRT_2 * text_leg;

        let flipped = position.flips_text();
        let mut text_frame = triangle_frame.rotate_degrees(45.0);
        if flipped {
            text_frame = text_frame.translate(0.0, -lean).scale(-1.0, -1.0);
        }

        // Baseline sits so the ascent..descent box is centred across the band.
        let text_origin = Vec2::new(-text.width / 2.0, (-lean + text.ascent - text.descent) / 2.0);

        Self { leg, text_leg, triangle_frame, triangle, text_frame, text_origin, flipped }
    }

    /// Badge outline in surface coordinates.
    pub fn device_triangle(&self) -> Path {
        self.triangle.transformed(self.triangle_frame)
    }
}
