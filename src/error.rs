// Error types for coursenav.
// Covers hosting API failures, malformed listings, and local IO errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourseError {
    /// The hosting API answered with a non-success status.
    #[error("HTTP {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    /// The request never completed (DNS, connectivity, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body is not a JSON array of directory entries.
    #[error("Unexpected listing response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CourseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message_carries_code() {
        let err = CourseError::HttpStatus {
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 Not Found");
    }

    #[test]
    fn test_parse_error_converts() {
        let err: CourseError = serde_json::from_str::<Vec<u8>>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, CourseError::Parse(_)));
    }
}
