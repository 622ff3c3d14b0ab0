use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single enum-typed field that carries a token outside its enum's set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumViolation {
    /// Attribute name of the offending field (e.g. `LifecycleState`).
    pub field: &'static str,
    /// Token found on the record.
    pub actual: String,
    /// Canonical tokens of the field's enum, in declaration order.
    pub supported: &'static [&'static str],
}

impl fmt::Display for EnumViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported enum value for {}: {}. Supported values are: {}.",
            self.field,
            self.actual,
            self.supported.join(",")
        )
    }
}

/// Enum validation failure for one record: every offending field, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub record: &'static str,
    pub violations: Vec<EnumViolation>,
}

impl ValidationError {
    pub fn new(record: &'static str, violations: Vec<EnumViolation>) -> Self {
        Self { record, violations }
    }

    /// Names of the offending fields.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.violations.iter().map(|v| v.field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Structured error envelope returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub code: Option<String>,
    pub message: String,
    pub request_id: Option<String>,
    /// Raw response body for debugging (when available).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_body: Option<String>,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            code: None,
            message: message.into(),
            request_id: None,
            raw_body: None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = &self.code {
            write!(f, "{} ({}): {}", code, self.status, self.message)
        } else {
            write!(f, "{}: {}", self.status, self.message)
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience alias for fallible results.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Unified error type surfaced by the crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("mandatory field {field} of {record} is not present")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATES: &[&str] = &["CREATING", "ACTIVE"];

    #[test]
    fn violation_formats_canonical_message() {
        let violation = EnumViolation {
            field: "LifecycleState",
            actual: "BOGUS".into(),
            supported: STATES,
        };
        assert_eq!(
            violation.to_string(),
            "unsupported enum value for LifecycleState: BOGUS. Supported values are: CREATING,ACTIVE."
        );
    }

    #[test]
    fn validation_error_joins_lines_with_newline() {
        let err = ValidationError::new(
            "Example",
            vec![
                EnumViolation {
                    field: "First",
                    actual: "x".into(),
                    supported: STATES,
                },
                EnumViolation {
                    field: "Second",
                    actual: "y".into(),
                    supported: STATES,
                },
            ],
        );
        let text = err.to_string();
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("unsupported enum value for First: x."));
        assert!(!text.ends_with('\n'));
        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["First", "Second"]);
    }

    #[test]
    fn api_error_keeps_status_and_body() {
        let api_err = ApiError {
            status: 409,
            code: Some("IncorrectState".into()),
            message: "resource is busy".into(),
            request_id: Some("req_123".into()),
            raw_body: Some("{\"code\":\"IncorrectState\"}".into()),
        };

        assert_eq!(api_err.to_string(), "IncorrectState (409): resource is busy");
        assert!(api_err.raw_body.is_some());
        assert_eq!(ApiError::new(500, "boom").to_string(), "500: boom");
    }

    #[test]
    fn missing_field_names_record_and_field() {
        let err = Error::MissingField {
            record: "MigrateDrgRequest",
            field: "drgId",
        };
        assert_eq!(
            err.to_string(),
            "mandatory field drgId of MigrateDrgRequest is not present"
        );
    }
}
