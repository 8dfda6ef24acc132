//! DTOs for the save endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::response::Response;

/// Request body for `POST /url`.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The URL to shorten (absolute, any scheme `url::Url` accepts).
    #[serde(default)]
    #[validate(length(min = 1, code = "required"), url(code = "url"))]
    pub url: String,

    /// Optional caller-chosen alias; generated when absent or empty.
    #[serde(default)]
    pub alias: Option<String>,
}

/// Response body for `POST /url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    #[serde(flatten)]
    pub response: Response,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl SaveResponse {
    pub fn ok(alias: impl Into<String>) -> Self {
        Self {
            response: Response::ok(),
            alias: Some(alias.into()),
        }
    }
}

impl From<Response> for SaveResponse {
    fn from(response: Response) -> Self {
        Self {
            response,
            alias: None,
        }
    }
}
