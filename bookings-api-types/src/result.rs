use serde::{Deserialize, Serialize};

/// Body returned by the server when an `/api` request could not be fulfilled.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JsonError {
    pub error_message: String,
}
