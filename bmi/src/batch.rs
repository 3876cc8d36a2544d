//! Batch evaluation of many weight/height pairs
//!
//! Each request is evaluated independently; with the `parallel` feature
//! the work is spread over the rayon thread pool. Output order always
//! matches input order.

use bmi_core::Result;
use serde_json::Value;

use crate::evaluator::evaluate;

/// One weight/height pair awaiting evaluation
///
/// Missing fields deserialize as `null` and are rejected at evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BmiRequest {
    /// Weight in kilograms
    #[cfg_attr(feature = "serde", serde(default))]
    pub weight: Value,
    /// Height in meters
    #[cfg_attr(feature = "serde", serde(default))]
    pub height: Value,
}

impl BmiRequest {
    /// Create a request from anything convertible into JSON values
    pub fn new(weight: impl Into<Value>, height: impl Into<Value>) -> Self {
        Self {
            weight: weight.into(),
            height: height.into(),
        }
    }

    /// Evaluate this request into the result message
    pub fn evaluate(&self) -> Result<String> {
        evaluate(&self.weight, &self.height)
    }
}

/// Evaluate every request, keeping results in input order
#[cfg(feature = "parallel")]
pub fn evaluate_batch(requests: &[BmiRequest]) -> Vec<Result<String>> {
    use rayon::prelude::*;

    log::debug!(
        "evaluating {} requests on {} threads",
        requests.len(),
        rayon::current_num_threads()
    );

    requests.par_iter().map(BmiRequest::evaluate).collect()
}

/// Evaluate every request, keeping results in input order
#[cfg(not(feature = "parallel"))]
pub fn evaluate_batch(requests: &[BmiRequest]) -> Vec<Result<String>> {
    log::debug!("evaluating {} requests", requests.len());

    requests.iter().map(BmiRequest::evaluate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_core::BmiError;

    #[test]
    fn test_evaluate_batch_preserves_order() {
        let requests = vec![
            BmiRequest::new(70, 1.75),
            BmiRequest::new("70", 1.75),
            BmiRequest::new(45, 1.70),
            BmiRequest::new(90, 1.70),
        ];

        let results = evaluate_batch(&requests);

        assert_eq!(
            results,
            vec![
                Ok("Your BMI is 23, so you have a normal weight.".to_string()),
                Err(BmiError::InvalidInput),
                Ok("Your BMI is 16, so you are underweight.".to_string()),
                Ok("Your BMI is 31, so you are overweight.".to_string()),
            ]
        );
    }

    #[test]
    fn test_evaluate_batch_empty() {
        assert!(evaluate_batch(&[]).is_empty());
    }

    #[test]
    fn test_default_request_is_rejected() {
        assert_eq!(BmiRequest::default().evaluate(), Err(BmiError::InvalidInput));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_request_deserialization() {
        let requests: Vec<BmiRequest> = serde_json::from_str(
            r#"[{"weight": 70, "height": 1.75}, {"weight": "70", "height": 1.75}, {"height": 1.75}]"#,
        )
        .unwrap();

        assert_eq!(requests[0], BmiRequest::new(70, 1.75));
        assert_eq!(requests[2].weight, Value::Null);

        let results = evaluate_batch(&requests);
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(BmiError::InvalidInput));
        assert_eq!(results[2], Err(BmiError::InvalidInput));
    }
}
