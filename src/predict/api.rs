//! Wire contract for the `POST /predict` endpoint.

use serde::Deserialize;

use crate::http_client;

use super::multipart;

const MAX_RESPONSE_BYTES: usize = 256 * 1024;

/// A successful classification result.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Prediction {
    /// Predicted breed label.
    pub breed: String,
    /// Confidence percentage, 0-100.
    pub confidence: f64,
    /// Whether the service believes the image shows a dog. Absent means yes.
    #[serde(default = "default_true")]
    pub is_dog: bool,
    /// Optional explanation, used by the not-a-dog branch.
    #[serde(default)]
    pub message: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Failures while submitting an image for classification.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The request never completed.
    #[error("Network error: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("HTTP {code}: {body}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body, bounded and trimmed for display.
        body: String,
    },
    /// The response body was not the expected JSON.
    #[error("Invalid response: {0}")]
    Json(String),
    /// The service reported a payload-level error.
    #[error("{0}")]
    Application(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PredictPayload {
    // Must come first: a payload carrying `error` renders nothing else.
    Failure { error: String },
    Success(Prediction),
}

/// Submit an image to the service and parse the classification response.
///
/// Blocking; callers run this on a worker thread.
pub fn classify(endpoint: &str, file_name: &str, content: &[u8]) -> Result<Prediction, PredictError> {
    let url = format!("{}/predict", endpoint.trim_end_matches('/'));
    let body = multipart::encode_file_field("file", file_name, content);

    let response = match http_client::agent()
        .post(&url)
        .set("Accept", "application/json")
        .set("Content-Type", &body.content_type)
        .send_bytes(&body.bytes)
    {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .unwrap_or_default();
            return Err(PredictError::Status {
                code,
                body: trim_for_display(&body),
            });
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(PredictError::Transport(err.to_string()));
        }
    };

    let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)
        .map_err(|err| PredictError::Json(err.to_string()))?;
    parse_prediction(&bytes)
}

fn parse_prediction(bytes: &[u8]) -> Result<Prediction, PredictError> {
    let payload: PredictPayload =
        serde_json::from_slice(bytes).map_err(|err| PredictError::Json(err.to_string()))?;
    match payload {
        PredictPayload::Failure { error } => Err(PredictError::Application(error)),
        PredictPayload::Success(prediction) => Ok(prediction),
    }
}

const MAX_DISPLAY_CHARS: usize = 200;

fn trim_for_display(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_DISPLAY_CHARS {
        return trimmed.to_string();
    }
    let mut short: String = trimmed.chars().take(MAX_DISPLAY_CHARS).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_payload_parses() {
        let parsed = parse_prediction(
            br#"{"breed":"Labrador","confidence":87.5,"is_dog":true}"#,
        )
        .expect("prediction");
        assert_eq!(parsed.breed, "Labrador");
        assert_eq!(parsed.confidence, 87.5);
        assert!(parsed.is_dog);
        assert_eq!(parsed.message, None);
    }

    #[test]
    fn missing_is_dog_defaults_to_dog() {
        let parsed =
            parse_prediction(br#"{"breed":"Beagle","confidence":64.2}"#).expect("prediction");
        assert!(parsed.is_dog);
    }

    #[test]
    fn not_dog_payload_keeps_message() {
        let parsed = parse_prediction(
            br#"{"breed":"Unknown","confidence":42.0,"is_dog":false,"message":"No dog detected"}"#,
        )
        .expect("prediction");
        assert!(!parsed.is_dog);
        assert_eq!(parsed.message.as_deref(), Some("No dog detected"));
    }

    #[test]
    fn error_payload_wins_over_other_fields() {
        let error = parse_prediction(
            br#"{"error":"model unavailable","breed":"Labrador","confidence":99.0}"#,
        )
        .expect_err("application error");
        match error {
            PredictError::Application(message) => assert_eq!(message, "model unavailable"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_json_maps_to_json_error() {
        let error = parse_prediction(b"<html>oops</html>").expect_err("json error");
        assert!(matches!(error, PredictError::Json(_)));
    }

    #[test]
    fn status_error_display_contains_code() {
        let error = PredictError::Status {
            code: 500,
            body: "Internal Server Error".into(),
        };
        assert!(error.to_string().contains("500"));
    }

    #[test]
    fn long_bodies_are_trimmed_for_display() {
        let body = "x".repeat(1000);
        let trimmed = trim_for_display(&body);
        assert!(trimmed.chars().count() <= MAX_DISPLAY_CHARS + 1);
        assert!(trimmed.ends_with('…'));
    }
}
