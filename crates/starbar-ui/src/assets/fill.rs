use std::fmt;

/// Visual state of a single star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FillLevel {
    Empty,
    Quarter,
    Half,
    ThreeQuarter,
    Full,
}

impl FillLevel {
    /// Every level, in index order.
    pub const ALL: [FillLevel; 5] = [
        FillLevel::Empty,
        FillLevel::Quarter,
        FillLevel::Half,
        FillLevel::ThreeQuarter,
        FillLevel::Full,
    ];

    /// Picks the level for a star from `rating - star_index`.
    ///
    /// Thresholds sit at fixed quarter steps whatever the input step size.
    /// Anything below a quarter, including negative and NaN differences, is
    /// `Empty`.
    pub fn from_diff(diff: f32) -> Self {
        if diff >= 1.0 {
            FillLevel::Full
        } else if diff >= 0.75 {
            FillLevel::ThreeQuarter
        } else if diff >= 0.5 {
            FillLevel::Half
        } else if diff >= 0.25 {
            FillLevel::Quarter
        } else {
            FillLevel::Empty
        }
    }

    /// Position in [`FillLevel::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Filled portion of the star, from 0.0 to 1.0.
    #[inline]
    pub fn fraction(self) -> f32 {
        self.index() as f32 * 0.25
    }

    /// Lowercase name, used for asset file names and markup.
    pub fn name(self) -> &'static str {
        match self {
            FillLevel::Empty => "empty",
            FillLevel::Quarter => "quarter",
            FillLevel::Half => "half",
            FillLevel::ThreeQuarter => "three_quarter",
            FillLevel::Full => "full",
        }
    }
}

impl fmt::Display for FillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(FillLevel::from_diff(1.0), FillLevel::Full);
        assert_eq!(FillLevel::from_diff(0.75), FillLevel::ThreeQuarter);
        assert_eq!(FillLevel::from_diff(0.5), FillLevel::Half);
        assert_eq!(FillLevel::from_diff(0.25), FillLevel::Quarter);
        assert_eq!(FillLevel::from_diff(0.249), FillLevel::Empty);
    }

    #[test]
    fn out_of_range_diffs() {
        assert_eq!(FillLevel::from_diff(3.4), FillLevel::Full);
        assert_eq!(FillLevel::from_diff(-0.4), FillLevel::Empty);
        assert_eq!(FillLevel::from_diff(f32::NAN), FillLevel::Empty);
    }

    #[test]
    fn index_matches_all_order() {
        for (i, level) in FillLevel::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
        }
        assert_eq!(FillLevel::ThreeQuarter.fraction(), 0.75);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(FillLevel::ThreeQuarter.to_string(), "three_quarter");
    }
}
