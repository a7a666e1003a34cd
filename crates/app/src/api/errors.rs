//! API errors.

use serde_json::Value;
use thiserror::Error;

const MAX_PLAIN_MESSAGE_LEN: usize = 200;

/// Errors returned by the storefront API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("request failed with status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,

        /// Response body as text.
        body: String,
    },
}

impl ApiError {
    /// Message to show the user.
    ///
    /// Uses the server's `message` (or `error`) field when the body is a JSON object, a short
    /// plain-text body as-is, and `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        let Self::Status { body, .. } = self else {
            return fallback.to_string();
        };

        let body = body.trim();

        if body.is_empty() {
            return fallback.to_string();
        }

        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(fields)) => ["message", "error"]
                .iter()
                .filter_map(|key| fields.get(*key).and_then(Value::as_str))
                .map(str::trim)
                .find(|message| !message.is_empty())
                .map_or_else(|| fallback.to_string(), str::to_string),
            Ok(_) => fallback.to_string(),
            Err(_) if body.len() <= MAX_PLAIN_MESSAGE_LEN && !body.starts_with('<') => {
                body.to_string()
            }
            Err(_) => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(body: &str) -> ApiError {
        ApiError::Status {
            status: 400,
            body: body.to_string(),
        }
    }

    #[test]
    fn prefers_server_message() {
        let error = status(r#"{"message": "Name is required", "error": "Bad Request"}"#);

        assert_eq!(error.user_message("Could not save product."), "Name is required");
    }

    #[test]
    fn falls_back_to_error_field() {
        let error = status(r#"{"error": "Unauthorized", "status": 401}"#);

        assert_eq!(error.user_message("Login failed"), "Unauthorized");
    }

    #[test]
    fn short_plain_text_is_used_verbatim() {
        assert_eq!(status("Invalid reset key").user_message("Reset failed"), "Invalid reset key");
    }

    #[test]
    fn html_and_empty_bodies_use_fallback() {
        assert_eq!(
            status("<html><body>502</body></html>").user_message("Unable to load products."),
            "Unable to load products."
        );
        assert_eq!(status("  ").user_message("Reset failed"), "Reset failed");
        assert_eq!(status("[1, 2]").user_message("Reset failed"), "Reset failed");
    }
}
