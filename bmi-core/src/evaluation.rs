//! BMI evaluation: computation, rounding and classification of one reading
//!
//! Every function here is pure. Zero, negative and non-finite inputs are
//! not rejected; they flow through the arithmetic and are classified like
//! any other value.

use crate::classification::Classification;
use crate::rounding::round_half_away_from_zero;
use core::fmt::Write;

#[cfg(feature = "alloc")]
use alloc::string::{String, ToString};

/// Compute the raw BMI: weight (kg) over height (m) squared
pub fn compute_bmi(weight: f64, height: f64) -> f64 {
    weight / (height * height)
}

/// BMI rounded to the nearest integer for display
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RoundedBmi(f64);

impl RoundedBmi {
    /// Round a raw BMI value
    pub fn from_bmi(bmi: f64) -> Self {
        Self(round_half_away_from_zero(bmi))
    }

    /// The rounded value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl core::fmt::Display for RoundedBmi {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Integral f64 values print without a fractional part
        if self.0.is_nan() {
            write!(f, "NaN")
        } else if self.0 == f64::INFINITY {
            write!(f, "Infinity")
        } else if self.0 == f64::NEG_INFINITY {
            write!(f, "-Infinity")
        } else if self.0 >= EXPONENT_THRESHOLD || self.0 <= -EXPONENT_THRESHOLD {
            write!(SignedExponent(f), "{:e}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Magnitude from which values print in exponent form (`1e+21`)
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Forwards `{:e}` output, writing the exponent with an explicit `+`
///
/// Only used for magnitudes of at least 1e21, so the exponent is positive.
struct SignedExponent<'a, 'b>(&'a mut core::fmt::Formatter<'b>);

impl core::fmt::Write for SignedExponent<'_, '_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        match s.find('e') {
            Some(pos) => {
                self.0.write_str(&s[..=pos])?;
                self.0.write_str("+")?;
                self.0.write_str(&s[pos + 1..])
            }
            None => self.0.write_str(s),
        }
    }
}

/// Outcome of evaluating one weight/height pair
///
/// `classification` is derived from the unrounded `bmi`, so at band limits
/// the displayed integer and the band need not agree (18.49 shows as 18
/// and is underweight; 24.9 shows as 25 and is normal).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Raw BMI value
    pub bmi: f64,
    /// BMI rounded for display
    pub rounded: RoundedBmi,
    /// Band the raw value falls into
    pub classification: Classification,
}

impl Evaluation {
    /// Evaluate a weight (kg) and height (m)
    pub fn new(weight: f64, height: f64) -> Self {
        Self::from_bmi(compute_bmi(weight, height))
    }

    /// Build an evaluation from an already computed BMI
    pub fn from_bmi(bmi: f64) -> Self {
        Self {
            bmi,
            rounded: RoundedBmi::from_bmi(bmi),
            classification: Classification::from_bmi(bmi),
        }
    }

    /// Whether the raw BMI is a finite number
    pub fn is_finite(&self) -> bool {
        self.bmi.is_finite()
    }

    /// Render the result message
    #[cfg(feature = "alloc")]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Your BMI is {}, so you {}.",
            self.rounded,
            self.classification.phrase()
        )
    }
}

/// Evaluate a weight (kg) and height (m) and render the result message
#[cfg(feature = "alloc")]
pub fn message(weight: f64, height: f64) -> String {
    Evaluation::new(weight, height).message()
}
