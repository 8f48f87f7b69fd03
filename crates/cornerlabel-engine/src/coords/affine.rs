use super::Vec2;

/// 2D affine transform (2×3 matrix) with canvas semantics.
///
/// Maps a local point `(x, y)` to `(a·x + c·y + e, b·x + d·y + f)`.
///
/// The builder methods [`translate`](Self::translate), [`rotate_degrees`](Self::rotate_degrees)
/// and [`scale`](Self::scale) post-multiply: each call transforms the *local*
/// frame, so `Affine::IDENTITY.translate(h, h).rotate_degrees(90.0)` rotates
/// around `(h, h)` in device space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    #[inline]
    pub const fn translation(tx: f32, ty: f32) -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: tx, f: ty }
    }

    #[inline]
    pub const fn scaling(sx: f32, sy: f32) -> Self {
        Self { a: sx, b: 0.0, c: 0.0, d: sy, e: 0.0, f: 0.0 }
    }

    /// Clockwise (on a +Y-down surface) rotation by `degrees`.
    ///
    /// Quarter turns produce exact 0/±1 entries.
    pub fn rotation_degrees(degrees: f32) -> Self {
        let (sin, cos) = sin_cos_degrees(degrees);
        Self { a: cos, b: sin, c: -sin, d: cos, e: 0.0, f: 0.0 }
    }

    /// Matrix product `self · rhs`: `rhs` is applied first, then `self`.
    #[inline]
    #[must_use]
    pub fn concat(self, rhs: Affine) -> Self {
        Self {
            a: self.a * rhs.a + self.c * rhs.b,
            b: self.b * rhs.a + self.d * rhs.b,
            c: self.a * rhs.c + self.c * rhs.d,
            d: self.b * rhs.c + self.d * rhs.d,
            e: self.a * rhs.e + self.c * rhs.f + self.e,
            f: self.b * rhs.e + self.d * rhs.f + self.f,
        }
    }

    #[inline]
    #[must_use]
    pub fn translate(self, tx: f32, ty: f32) -> Self {
        self.concat(Self::translation(tx, ty))
    }

    #[inline]
    #[must_use]
    pub fn rotate_degrees(self, degrees: f32) -> Self {
        self.concat(Self::rotation_degrees(degrees))
    }

    #[inline]
    #[must_use]
    pub fn scale(self, sx: f32, sy: f32) -> Self {
        self.concat(Self::scaling(sx, sy))
    }

    /// Maps a local point into the parent (device) space.
    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Device-space direction of the local +X axis (the text baseline direction).
    #[inline]
    pub fn x_axis(self) -> Vec2 {
        Vec2::new(self.a, self.b)
    }

    #[inline]
    pub fn determinant(self) -> f32 {
        self.a * self.d - self.b * self.c
    }

    /// Returns `None` for singular matrices (e.g. a zero scale).
    pub fn inverse(self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() <= f32::EPSILON {
            return None;
        }
        let inv = 1.0 / det;
        Some(Self {
            a: self.d * inv,
            b: -self.b * inv,
            c: -self.c * inv,
            d: self.a * inv,
            e: (self.c * self.f - self.d * self.e) * inv,
            f: (self.b * self.e - self.a * self.f) * inv,
        })
    }

    pub fn approx_eq(self, other: Affine, eps: f32) -> bool {
        let l = [self.a, self.b, self.c, self.d, self.e, self.f];
        let r = [other.a, other.b, other.c, other.d, other.e, other.f];
        l.iter().zip(r.iter()).all(|(x, y)| (x - y).abs() <= eps)
    }
}

/// `(sin, cos)` of an angle in degrees, exact at multiples of 90°.
fn sin_cos_degrees(degrees: f32) -> (f32, f32) {
    let turn = degrees.rem_euclid(360.0);
    if turn % 90.0 == 0.0 {
        match (turn / 90.0) as i32 {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        }
    } else {
        turn.to_radians().sin_cos()
    }
}
