//! This module defines the unit types used for derived quantities.
use derive_more::{Add, Display, Sub};

/// The number of minutes it takes for a clinic to serve one person in its queue
pub const MINUTES_PER_PERSON: Minutes = Minutes(15);

/// Represents a duration in whole minutes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Add, Sub, Display,
)]
pub struct Minutes(pub u32);

impl Minutes {
    /// Returns the number of minutes as a plain integer.
    pub fn value(self) -> u32 {
        self.0
    }
}

/// Saturates at `u32::MAX` minutes rather than overflowing
impl std::ops::Mul<u32> for Minutes {
    type Output = Minutes;

    fn mul(self, rhs: u32) -> Self::Output {
        Minutes(self.0.saturating_mul(rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Minutes(0))]
    #[case(1, Minutes(15))]
    #[case(4, Minutes(60))]
    fn test_minutes_per_person_scaling(#[case] people: u32, #[case] expected: Minutes) {
        assert_eq!(MINUTES_PER_PERSON * people, expected);
    }

    #[test]
    fn test_minutes_mul_saturates() {
        assert_eq!(MINUTES_PER_PERSON * u32::MAX, Minutes(u32::MAX));
        assert_eq!(MINUTES_PER_PERSON * 286_331_154, Minutes(u32::MAX));
    }

    #[test]
    fn test_minutes_display() {
        assert_eq!(Minutes(45).to_string(), "45");
        assert_eq!((Minutes(30) + Minutes(15)).value(), 45);
    }
}
