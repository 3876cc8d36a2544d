//! BMI - Body Mass Index evaluation with strict input validation
//!
//! This library evaluates weight/height pairs into a BMI result message,
//! rejecting any input that is not a number before doing arithmetic.
//!
//! ## Architecture
//!
//! - **bmi-core**: Pure computation, rounding and classification (no I/O, `no_std`)
//! - **bmi**: Dynamic-type input boundary, logging and batch evaluation
//!
//! ## Quick Start
//!
//! ```rust
//! use bmi::{evaluate, BmiError};
//! use serde_json::json;
//!
//! let message = evaluate(&json!(70), &json!(1.75))?;
//! assert_eq!(message, "Your BMI is 23, so you have a normal weight.");
//!
//! // Numeric-looking strings are not coerced
//! assert_eq!(evaluate(&json!("70"), &json!(1.75)), Err(BmiError::InvalidInput));
//! # Ok::<(), BmiError>(())
//! ```

// Re-export core abstractions
pub use bmi_core::{
    // Computation
    compute_bmi, round_half_away_from_zero, Evaluation, RoundedBmi,
    // Classification
    Classification, NORMAL_LIMIT, UNDERWEIGHT_LIMIT,
    // Error handling
    BmiError, Result,
};

// Implementation modules
pub mod batch;
pub mod evaluator;

// Public exports
pub use batch::{evaluate_batch, BmiRequest};
pub use evaluator::{evaluate, evaluate_numbers, evaluate_report, numeric_input};
