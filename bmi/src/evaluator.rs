//! Strict evaluation boundary over dynamically typed inputs
//!
//! Inputs arrive as `serde_json::Value`. Only JSON numbers are accepted;
//! strings (numeric-looking or not), booleans, null, arrays and objects
//! fail with [`BmiError::InvalidInput`] before any arithmetic runs.

use bmi_core::{BmiError, Evaluation, Result};
use log::{debug, warn};
use serde_json::Value;

/// Extract a number from a dynamically typed input
///
/// Performs a type check only: no coercion from strings or booleans and
/// no range check.
pub fn numeric_input(value: &Value) -> Result<f64> {
    match value {
        Value::Number(number) => number.as_f64().ok_or(BmiError::InvalidInput),
        other => {
            debug!("rejecting non-numeric input: {other}");
            Err(BmiError::InvalidInput)
        }
    }
}

/// Evaluate a weight (kg) and height (m) into a structured result
///
/// Fails with [`BmiError::InvalidInput`] when either input is not a number.
pub fn evaluate_report(weight: &Value, height: &Value) -> Result<Evaluation> {
    let weight = numeric_input(weight)?;
    let height = numeric_input(height)?;
    Ok(evaluate_logged(weight, height))
}

/// Evaluate a weight (kg) and height (m) into the result message
///
/// Fails with [`BmiError::InvalidInput`] when either input is not a number.
/// Zero, negative and non-finite numbers are accepted and produce whatever
/// the arithmetic yields (`evaluate(70, 0)` reports an infinite BMI).
pub fn evaluate(weight: &Value, height: &Value) -> Result<String> {
    evaluate_report(weight, height).map(|evaluation| evaluation.message())
}

/// Evaluate already typed inputs into the result message
pub fn evaluate_numbers(weight: f64, height: f64) -> String {
    evaluate_logged(weight, height).message()
}

fn evaluate_logged(weight: f64, height: f64) -> Evaluation {
    if weight <= 0.0 || height <= 0.0 {
        warn!("non-positive input: weight={weight}, height={height}");
    }

    let evaluation = Evaluation::new(weight, height);

    if !evaluation.is_finite() {
        warn!(
            "non-finite BMI {} for weight={weight}, height={height}",
            evaluation.bmi
        );
    }

    debug!(
        "weight={weight} height={height} bmi={} class={}",
        evaluation.bmi, evaluation.classification
    );

    evaluation
}
