use serde::{Deserialize, Serialize};

/// The response body the timer server sends when a request fails
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}
