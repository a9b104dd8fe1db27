use thiserror::Error;

/// Errors reading the page-embedded configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Missing configuration element: #{0}")]
    MissingElement(String),
    #[error("Missing required configuration attribute: {0}")]
    MissingAttribute(String),
    #[error("Invalid value for configuration attribute {attribute}: {reason}")]
    InvalidAttribute { attribute: String, reason: String },
}

/// Errors fetching JSON from the timer server
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Failed to send request: {0}")]
    Request(String),
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
}
