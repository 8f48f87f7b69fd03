use cornerlabel_engine::coords::Vec2;
use cornerlabel_engine::text::TextMeasure;

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed from the host to a widget during measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: the widget must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: the widget can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No constraint: the widget can take any positive size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::splat(f32::INFINITY) }
    }

    /// Explicit range: the widget can be any size in `[min, max]`.
    #[inline]
    pub fn between(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn width_spec(self) -> MeasureSpec {
        MeasureSpec::from_axis(self.min.x, self.max.x)
    }

    #[inline]
    pub fn height_spec(self) -> MeasureSpec {
        MeasureSpec::from_axis(self.min.y, self.max.y)
    }
}

// ── MeasureSpec ───────────────────────────────────────────────────────────

/// How much freedom the host grants along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecMode {
    /// The size is fixed by the host.
    Exactly,
    /// The widget may pick any size up to `size`.
    AtMost,
    /// No bound at all.
    Unspecified,
}

/// Single-axis view of [`Constraints`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureSpec {
    pub mode: SpecMode,
    pub size: f32,
}

impl MeasureSpec {
    #[inline]
    pub const fn exactly(size: f32) -> Self {
        Self { mode: SpecMode::Exactly, size }
    }

    #[inline]
    pub const fn at_most(size: f32) -> Self {
        Self { mode: SpecMode::AtMost, size }
    }

    #[inline]
    pub const fn unspecified() -> Self {
        Self { mode: SpecMode::Unspecified, size: 0.0 }
    }

    /// `min == max` is exact, a finite max is an upper bound, anything else is free.
    pub fn from_axis(min: f32, max: f32) -> Self {
        if min == max {
            Self::exactly(max)
        } else if max.is_finite() {
            Self::at_most(max)
        } else {
            Self::unspecified()
        }
    }

    /// `true` when the widget picks its own size along this axis.
    ///
    /// `Unspecified` counts as shrink-to-fit too. A check on
    /// `AtMost` alone would send an unbounded axis down the fixed-size branches
    /// of [`square_footprint`] with a meaningless size of zero.
    #[inline]
    pub fn is_shrink_to_fit(self) -> bool {
        matches!(self.mode, SpecMode::AtMost | SpecMode::Unspecified)
    }
}

/// Square footprint for a widget whose drawing assumes square symmetry.
///
/// - both axes shrink-to-fit → `2 · side_length` square
/// - one axis shrink-to-fit → square of the other, fixed axis
/// - both fixed and unequal → square of the smaller one
/// - both fixed and equal → as given
pub fn square_footprint(width: MeasureSpec, height: MeasureSpec, side_length: f32) -> Vec2 {
    match (width.is_shrink_to_fit(), height.is_shrink_to_fit()) {
        (true, true) => Vec2::splat(side_length * 2.0),
        (true, false) => Vec2::splat(height.size),
        (false, true) => Vec2::splat(width.size),
        (false, false) if width.size != height.size => Vec2::splat(width.size.min(height.size)),
        (false, false) => Vec2::new(width.size, height.size),
    }
}

// ── LayoutCtx ────────────────────────────────────────────────────────────

/// Resources made available to [`Widget::measure`](crate::widget::Widget::measure).
pub struct LayoutCtx<'a> {
    pub text: &'a dyn TextMeasure,
}
