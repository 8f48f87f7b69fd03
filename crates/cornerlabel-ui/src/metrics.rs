use cornerlabel_markup::ast::Unit;

/// Conversion factors from density-independent units to device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    /// Device pixels per `dp`.
    pub density: f32,
    /// Device pixels per `sp` (density × user font scale).
    pub scaled_density: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self { density: 1.0, scaled_density: 1.0 }
    }
}

impl DisplayMetrics {
    /// Metrics for a display with `density` and no extra font scaling.
    pub fn with_density(density: f32) -> Self {
        Self { density, scaled_density: density }
    }

    #[inline]
    pub fn dp(self, v: f32) -> f32 {
        v * self.density
    }

    #[inline]
    pub fn sp(self, v: f32) -> f32 {
        v * self.scaled_density
    }

    /// Converts a markup dimension to device pixels.
    pub fn resolve(self, v: f32, unit: Unit) -> f32 {
        match unit {
            Unit::Px => v,
            Unit::Dp => self.dp(v),
            Unit::Sp => self.sp(v),
        }
    }
}
