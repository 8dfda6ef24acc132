//! The JSON envelope shared by every URL handler.
//!
//! Domain failures are reported in the body, not through the HTTP status:
//! clients must branch on `status`.

use serde::{Deserialize, Serialize};
use validator::{ValidationErrors, ValidationErrorsKind};

/// Outcome marker of an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Error")]
    Error,
}

/// `{ "status": "OK" | "Error", "error"?: string }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: Status,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: Some(message.into()),
        }
    }

    /// Renders validation failures as one human-readable message.
    ///
    /// Only the first failed rule of each field is reported, fields in
    /// alphabetical order, e.g. `field url is not a valid URL`.
    pub fn validation_error(errors: &ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.errors().iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));

        let messages: Vec<String> = fields
            .into_iter()
            .filter_map(|(field, kind)| match kind {
                ValidationErrorsKind::Field(errs) => errs
                    .iter()
                    .find(|err| err.code == "required")
                    .or_else(|| errs.first())
                    .map(|err| match err.code.as_ref() {
                        "required" => format!("field {field} is a required field"),
                        "url" => format!("field {field} is not a valid URL"),
                        _ => match &err.message {
                            Some(message) => format!("field {field} {message}"),
                            None => format!("field {field} is not valid"),
                        },
                    }),
                _ => None,
            })
            .collect();

        Self::error(messages.join(", "))
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}
