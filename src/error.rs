//! API Errors
//!
//! Every request failure ends up as an `ApiError`; views turn it into text
//! with `to_string()` and never let it travel further.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("session expired, please sign in again")]
    Unauthorized,

    #[error("{}", status_message(.status, .detail))]
    Status { status: u16, detail: Option<String> },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("could not read the selected file: {0}")]
    File(String),
}

impl ApiError {
    /// Classify a non-success response from its status and raw body
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            _ => ApiError::Status { status, detail: detail_from_body(body) },
        }
    }
}

fn status_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!("server returned {}: {}", status, detail),
        None => format!("server returned {}", status),
    }
}

/// Pull a human readable message out of an error body.
///
/// DRF errors carry `detail`; the console's own envelope carries `message`
/// or, failing that, a `code`.
pub fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["detail", "message", "code"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_from_drf_body() {
        let body = r#"{"detail": "Not found."}"#;
        assert_eq!(detail_from_body(body).as_deref(), Some("Not found."));
    }

    #[test]
    fn test_detail_from_envelope() {
        let body = r#"{"status": "error", "code": "VALIDATION_ERROR", "data": {"name": ["required"]}}"#;
        assert_eq!(detail_from_body(body).as_deref(), Some("VALIDATION_ERROR"));
    }

    #[test]
    fn test_detail_from_non_json() {
        assert_eq!(detail_from_body("<html>502</html>"), None);
    }

    #[test]
    fn test_from_response() {
        assert_eq!(ApiError::from_response(401, ""), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_response(404, r#"{"detail": "Not found."}"#).to_string(),
            "server returned 404: Not found."
        );
        assert_eq!(ApiError::from_response(500, "").to_string(), "server returned 500");
    }
}
