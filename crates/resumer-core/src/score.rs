//! Scores and the tier classification used for presentation emphasis.

use std::fmt;

/// Highest score an analysis may report.
pub const MAX_SCORE: u8 = 100;

/// A score in `0..=100`.
///
/// Construct with [`Score::new`]; out-of-range values are rejected rather
/// than clamped so that a bad payload is visible at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    pub fn new(value: i64) -> Option<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_SCORE)
            .map(Self)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Fraction of the maximum, for gauges and bars.
    pub fn ratio(self) -> f64 {
        f64::from(self.0) / f64::from(MAX_SCORE)
    }

    pub fn tier(self) -> Tier {
        Tier::of(self)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Three-level classification of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Top,
    Mid,
    Low,
}

impl Tier {
    pub const TOP_THRESHOLD: u8 = 80;
    pub const MID_THRESHOLD: u8 = 60;

    pub fn of(score: Score) -> Self {
        match score.value() {
            s if s >= Self::TOP_THRESHOLD => Self::Top,
            s if s >= Self::MID_THRESHOLD => Self::Mid,
            _ => Self::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Top => "Strong",
            Self::Mid => "Fair",
            Self::Low => "Weak",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(v: i64) -> Tier {
        Score::new(v).unwrap().tier()
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(tier(0), Tier::Low);
        assert_eq!(tier(59), Tier::Low);
        assert_eq!(tier(60), Tier::Mid);
        assert_eq!(tier(79), Tier::Mid);
        assert_eq!(tier(80), Tier::Top);
        assert_eq!(tier(100), Tier::Top);
    }

    #[test]
    fn every_score_maps_to_its_tier() {
        for v in 0..=100 {
            let expected = if v >= 80 {
                Tier::Top
            } else if v >= 60 {
                Tier::Mid
            } else {
                Tier::Low
            };
            assert_eq!(tier(v), expected, "score {v}");
        }
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(Score::new(-1).is_none());
        assert!(Score::new(101).is_none());
        assert!(Score::new(1000).is_none());
    }

    #[test]
    fn ratio_is_proportional() {
        assert_eq!(Score::new(0).unwrap().ratio(), 0.0);
        assert_eq!(Score::new(100).unwrap().ratio(), 1.0);
        assert!((Score::new(78).unwrap().ratio() - 0.78).abs() < f64::EPSILON);
    }
}
