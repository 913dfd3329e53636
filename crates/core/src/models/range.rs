use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A closed interval `[min, max]` of fixed-precision decimal values.
///
/// Stored as integer units of `10^-scale` so every draw lands exactly on the
/// documented precision and never outside the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalRange {
    min_units: i64,
    max_units: i64,
    scale: u32,
}

impl DecimalRange {
    /// Build a range from integer units, e.g. `from_units(1_000, 10_000_000, 6)`
    /// is `[0.001000, 10.000000]`.
    ///
    /// Bounds are swapped if given in the wrong order.
    pub const fn from_units(min_units: i64, max_units: i64, scale: u32) -> Self {
        if min_units <= max_units {
            Self { min_units, max_units, scale }
        } else {
            Self { min_units: max_units, max_units: min_units, scale }
        }
    }

    /// Lower bound.
    pub fn min(&self) -> Decimal {
        Decimal::new(self.min_units, self.scale)
    }

    /// Upper bound.
    pub fn max(&self) -> Decimal {
        Decimal::new(self.max_units, self.scale)
    }

    /// Number of fractional digits every draw carries.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// `true` if `value` lies within `[min, max]`.
    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min() && value <= self.max()
    }

    /// Draw a value uniformly from the closed interval.
    ///
    /// An all-zero draw yields `min` and an all-ones draw yields `max`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Decimal {
        let units = Uniform::new_inclusive(self.min_units, self.max_units).sample(rng);
        Decimal::new(units, self.scale)
    }
}

/// A closed interval `[min, max]` of whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        Uniform::new_inclusive(self.min, self.max).sample(rng)
    }
}
