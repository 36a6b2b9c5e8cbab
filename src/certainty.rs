//! Certainty-factor arithmetic.
//!
//! A certainty factor is a confidence score in `[0, 1]` representing
//! belief strength in a fact or conclusion. This engine has no
//! disconfirming-evidence path, so negative factors never occur.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A certainty factor outside the valid `[0.0, 1.0]` range (or NaN).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("certainty factor {0} is out of range [0.0, 1.0]")]
pub struct InvalidCf(pub f32);

/// A validated certainty factor in `[0.0, 1.0]`.
///
/// `Cf` is `Copy` and all of its arithmetic is total: once a value is
/// constructed, combining, scaling, and comparing never fail and never
/// leave the valid range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cf(f32);

impl Cf {
    /// No confidence.
    pub const ZERO: Cf = Cf(0.0);

    /// Full confidence.
    pub const ONE: Cf = Cf(1.0);

    /// Creates a certainty factor with validation.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCf`] if the value is NaN or not in `[0.0, 1.0]`.
    pub fn new(value: f32) -> Result<Self, InvalidCf> {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(InvalidCf(value));
        }
        Ok(Self(value))
    }

    /// The raw value in `[0.0, 1.0]`.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Combines two independent pieces of evidence for the same conclusion:
    /// `cf1 + cf2 * (1 - cf1)`.
    ///
    /// Commutative for non-negative inputs, has identity at zero, is
    /// monotonically non-decreasing in each argument, and saturates
    /// toward 1.
    #[must_use]
    pub fn combine(self, other: Cf) -> Cf {
        // Mathematically bounded by 1; the min guards float rounding.
        Cf((self.0 + other.0 * (1.0 - self.0)).min(1.0))
    }

    /// Scales this factor by a multiplier in `[0.0, 1.0]`.
    #[must_use]
    pub fn scale(self, factor: f32) -> Cf {
        debug_assert!((0.0..=1.0).contains(&factor));
        Cf(self.0 * factor)
    }

    /// The smaller of two factors (min-of-conjunction semantics).
    #[must_use]
    pub fn min(self, other: Cf) -> Cf {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }

    /// Projects the factor to a percentage in `[0.0, 100.0]` for display.
    #[must_use]
    pub fn as_percent(self) -> f32 {
        self.0 * 100.0
    }
}

impl fmt::Display for Cf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Cf::new(-0.1).is_err());
        assert!(Cf::new(1.1).is_err());
        assert!(Cf::new(f32::NAN).is_err());
        assert!(Cf::new(0.0).is_ok());
        assert!(Cf::new(1.0).is_ok());
    }

    #[test]
    fn combine_is_commutative() {
        for (a, b) in [(0.0, 0.0), (0.3, 0.7), (0.5, 0.5), (1.0, 0.2), (0.99, 0.99)] {
            let x = Cf::new(a).unwrap();
            let y = Cf::new(b).unwrap();
            assert!((x.combine(y).value() - y.combine(x).value()).abs() < 1e-6);
        }
    }

    #[test]
    fn combine_zero_is_identity() {
        let cf = Cf::new(0.42).unwrap();
        assert_eq!(cf.combine(Cf::ZERO).value(), cf.value());
        assert_eq!(Cf::ZERO.combine(cf).value(), cf.value());
    }

    #[test]
    fn combine_saturates_monotonically() {
        for (a, b) in [(0.1, 0.2), (0.6, 0.5), (0.9, 0.9), (1.0, 1.0)] {
            let combined = Cf::new(a).unwrap().combine(Cf::new(b).unwrap()).value();
            assert!(combined >= a.max(b));
            assert!(combined <= 1.0);
        }
    }

    #[test]
    fn combine_matches_reference_value() {
        // 0.6 + 0.5 * (1 - 0.6) = 0.8
        let combined = Cf::new(0.6).unwrap().combine(Cf::new(0.5).unwrap());
        assert!((combined.value() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn min_picks_weaker_evidence() {
        let a = Cf::new(0.3).unwrap();
        let b = Cf::new(0.8).unwrap();
        assert_eq!(a.min(b), a);
        assert_eq!(b.min(a), a);
    }

    #[test]
    fn percent_projection() {
        assert!((Cf::new(0.755).unwrap().as_percent() - 75.5).abs() < 1e-4);
        assert_eq!(Cf::ONE.as_percent(), 100.0);
    }
}
