//! Power rating value object.
//!
//! Ratings are stored in tenths of a kVA so fractional catalogue entries
//! such as 112.5 kVA can be used as exact, ordered table keys.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Largest rating the catalogue can express (kVA).
const MAX_KVA: f64 = 100_000.0;

/// A transformer power rating in kVA, with one decimal of precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PowerRating(u32);

impl PowerRating {
    /// Creates a rating from tenths of a kVA (`1125` is 112.5 kVA).
    pub const fn from_tenths(tenths: u32) -> Self {
        Self(tenths)
    }

    /// Creates a rating from whole kVA.
    pub const fn from_kva(kva: u32) -> Self {
        Self(kva * 10)
    }

    /// Parses a kVA value, rejecting anything that is not a positive
    /// multiple of 0.1 kVA.
    pub fn try_from_kva(kva: f64) -> Result<Self, ValidationError> {
        if !kva.is_finite() || kva <= 0.0 || kva > MAX_KVA {
            return Err(ValidationError::invalid_format(
                "power",
                format!("expected a positive kVA rating up to {}, got {}", MAX_KVA, kva),
            ));
        }
        let tenths = (kva * 10.0).round();
        if (tenths / 10.0 - kva).abs() > 1e-9 {
            return Err(ValidationError::invalid_format(
                "power",
                format!("ratings have at most one decimal place, got {}", kva),
            ));
        }
        Ok(Self(tenths as u32))
    }

    /// Returns the rating in tenths of a kVA.
    pub fn tenths(&self) -> u32 {
        self.0
    }

    /// Returns the rating in kVA.
    pub fn kva(&self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl TryFrom<f64> for PowerRating {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_from_kva(value)
    }
}

impl From<PowerRating> for f64 {
    fn from(rating: PowerRating) -> Self {
        rating.kva()
    }
}

impl fmt::Display for PowerRating {
    /// Renders `300` for whole ratings and `112.5` for fractional ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 10;
        let frac = self.0 % 10;
        if frac == 0 {
            write!(f, "{}", whole)
        } else {
            write!(f, "{}.{}", whole, frac)
        }
    }
}
