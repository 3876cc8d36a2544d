//! Error types for BMI evaluation

/// Errors that can occur during BMI evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiError {
    /// Weight or height is not a number
    InvalidInput,
}

impl core::fmt::Display for BmiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            BmiError::InvalidInput => "Invalid input: weight and height must be numbers.",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for BmiError {}

/// Result type for BMI operations
pub type Result<T> = core::result::Result<T, BmiError>;
