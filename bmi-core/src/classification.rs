//! Classification bands for BMI values

/// Lowest BMI of the normal band; anything below is underweight
pub const UNDERWEIGHT_LIMIT: f64 = 18.5;

/// Highest BMI of the normal band; anything above is overweight
pub const NORMAL_LIMIT: f64 = 24.9;

/// Health category derived from an unrounded BMI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Classification {
    Underweight,
    Normal,
    Overweight,
}

impl Classification {
    /// Classify a raw BMI value
    ///
    /// Both limits belong to the normal band. Values that satisfy neither
    /// lower comparison, NaN included, are overweight.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_LIMIT {
            Classification::Underweight
        } else if (UNDERWEIGHT_LIMIT..=NORMAL_LIMIT).contains(&bmi) {
            Classification::Normal
        } else {
            Classification::Overweight
        }
    }

    /// Descriptive phrase completing "so you ..."
    pub const fn phrase(self) -> &'static str {
        match self {
            Classification::Underweight => "are underweight",
            Classification::Normal => "have a normal weight",
            Classification::Overweight => "are overweight",
        }
    }

    /// Short human-readable name
    pub const fn label(self) -> &'static str {
        match self {
            Classification::Underweight => "Underweight",
            Classification::Normal => "Normal",
            Classification::Overweight => "Overweight",
        }
    }
}

impl core::fmt::Display for Classification {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(Classification::from_bmi(18.4999), Classification::Underweight);
        assert_eq!(Classification::from_bmi(18.5), Classification::Normal);
        assert_eq!(Classification::from_bmi(24.9), Classification::Normal);
        assert_eq!(Classification::from_bmi(24.91), Classification::Overweight);
    }

    #[test]
    fn test_band_extremes() {
        assert_eq!(Classification::from_bmi(-5.0), Classification::Underweight);
        assert_eq!(Classification::from_bmi(0.0), Classification::Underweight);
        assert_eq!(
            Classification::from_bmi(f64::NEG_INFINITY),
            Classification::Underweight
        );
        assert_eq!(
            Classification::from_bmi(f64::INFINITY),
            Classification::Overweight
        );
        // NaN fails every comparison
        assert_eq!(Classification::from_bmi(f64::NAN), Classification::Overweight);
    }

    #[test]
    fn test_phrases() {
        assert_eq!(Classification::Underweight.phrase(), "are underweight");
        assert_eq!(Classification::Normal.phrase(), "have a normal weight");
        assert_eq!(Classification::Overweight.phrase(), "are overweight");
    }
}
