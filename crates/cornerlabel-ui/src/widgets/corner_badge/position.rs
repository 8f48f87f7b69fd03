/// Which corner of the square surface hosts the badge.
///
/// The discriminant is the number of clockwise quarter turns applied to the
/// canonical badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CornerPosition {
    #[default]
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

impl CornerPosition {
    pub const ALL: [CornerPosition; 4] = [
        CornerPosition::TopLeft,
        CornerPosition::TopRight,
        CornerPosition::BottomRight,
        CornerPosition::BottomLeft,
    ];

    /// Maps any integer onto a position, wrapping out-of-range values the same
    /// way a `index × 90°` rotation would.
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(4) as usize]
    }

    /// Parses `top_left`, `top_right`, `bottom_right` or `bottom_left`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "top_left" => Some(CornerPosition::TopLeft),
            "top_right" => Some(CornerPosition::TopRight),
            "bottom_right" => Some(CornerPosition::BottomRight),
            "bottom_left" => Some(CornerPosition::BottomLeft),
            _ => None,
        }
    }

    #[inline]
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Clockwise rotation applied to the canonical badge.
    #[inline]
    pub fn rotation_degrees(self) -> f32 {
        self.index() as f32 * 90.0
    }

    /// Whether the label would come out upside down after the rotation and
    /// needs a point reflection to read left-to-right.
    #[inline]
    pub fn flips_text(self) -> bool {
        matches!(self, CornerPosition::TopRight | CornerPosition::BottomRight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_wraps() {
        assert_eq!(CornerPosition::from_index(2), CornerPosition::BottomRight);
        assert_eq!(CornerPosition::from_index(5), CornerPosition::TopRight);
        assert_eq!(CornerPosition::from_index(-1), CornerPosition::BottomLeft);
    }

    #[test]
    fn names_round_trip_through_index() {
        for (i, name) in ["top_left", "top_right", "bottom_right", "bottom_left"].iter().enumerate() {
            let p = CornerPosition::from_name(name).unwrap();
            assert_eq!(p.index(), i as i32);
        }
        assert!(CornerPosition::from_name("middle").is_none());
    }

    #[test]
    fn only_right_hand_corners_flip() {
        let flips: Vec<bool> = CornerPosition::ALL.iter().map(|p| p.flips_text()).collect();
        assert_eq!(flips, vec![false, true, true, false]);
    }
}
