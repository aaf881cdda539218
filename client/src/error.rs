//! Error types for meal API client operations.
//!
//! Covers transport failures, configuration problems, and the ways an API
//! response can fail to have the expected shape. A plain "no data for these
//! dates" answer is not an error; see [`FetchOutcome::NotFound`](crate::FetchOutcome::NotFound).

use thiserror::Error;

/// Errors that can occur while configuring the client or fetching menus.
#[derive(Debug, Error)]
pub enum ClientError {
    /// File I/O failure (config load/save, saved responses).
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Response body is not valid JSON.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Config file could not be parsed or written.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Network failure or non-success HTTP status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The API answered with an error result code (e.g. an invalid key).
    #[error("API error {code}: {message}")]
    Api { code: String, message: String },

    /// The response parsed as JSON but does not have the expected layout.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Required configuration value is missing or empty.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Date arithmetic ran past the supported calendar.
    #[error("date out of range: {0}")]
    DateOutOfRange(String),

    /// A date range whose start is after its end.
    #[error("invalid date range: {from} is after {to}")]
    InvalidRange {
        from: chrono::NaiveDate,
        to: chrono::NaiveDate,
    },
}

impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => {
                Self::Http(format!("status {status} from {}", response.get_url()))
            }
            ureq::Error::Transport(transport) => Self::Http(transport.to_string()),
        }
    }
}

/// Convenience alias for results with [`ClientError`].
pub type Result<T> = std::result::Result<T, ClientError>;
