//! Response assertions shared by the stages.

use ml_lifecycle_sdk::ApiResponse;
use serde_json::Value;

use crate::error::{HarnessError, Result};

/// Assert the response carries the expected status code.
pub fn expect_status(response: &ApiResponse, expected: u16) -> Result<()> {
    if response.status == expected {
        Ok(())
    } else {
        Err(HarnessError::UnexpectedStatus {
            expected,
            actual: response.status,
        })
    }
}

/// Parse the response as a JSON sequence of predictions and assert it has
/// exactly one entry per input row.
pub fn expect_prediction_count(response: &ApiResponse, expected_rows: usize) -> Result<Vec<Value>> {
    let predictions: Vec<Value> = serde_json::from_str(&response.body).map_err(|e| {
        HarnessError::MalformedResponse(format!("prediction response is not a sequence: {}", e))
    })?;

    if predictions.len() != expected_rows {
        return Err(HarnessError::MalformedResponse(format!(
            "expected {} predictions, got {}",
            expected_rows,
            predictions.len()
        )));
    }

    Ok(predictions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_expect_status_match() {
        assert!(expect_status(&response(200, ""), 200).is_ok());
    }

    #[test]
    fn test_expect_status_mismatch_carries_observed_code() {
        let err = expect_status(&response(500, ""), 200).unwrap_err();
        match err {
            HarnessError::UnexpectedStatus { expected, actual } => {
                assert_eq!(expected, 200);
                assert_eq!(actual, 500);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_prediction_count_match() {
        let predictions =
            expect_prediction_count(&response(200, "[1.17, 2.98]"), 2).unwrap();
        assert_eq!(predictions.len(), 2);
    }

    #[test]
    fn test_prediction_count_mismatch() {
        let err = expect_prediction_count(&response(200, "[1.17]"), 2).unwrap_err();
        assert!(matches!(err, HarnessError::MalformedResponse(_)));
    }

    #[test]
    fn test_prediction_body_not_a_sequence() {
        let err =
            expect_prediction_count(&response(200, "{\"oops\": true}"), 2).unwrap_err();
        assert!(matches!(err, HarnessError::MalformedResponse(_)));
    }
}
