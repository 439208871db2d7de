//! Error types for the QuickSight model layer.
//!
//! Responsibilities:
//! - Define `ModelError`, the error returned by builders, strict parsing,
//!   validation, and HTTP binding resolution.
//! - Define the service error catalog (`ServiceErrorKind`) and `ServiceError`,
//!   the decoded form of an error response body.
//!
//! Does NOT handle:
//! - Transport failures (no transport lives in this crate).
//! - Retry scheduling (only classification via `is_retryable`).

use serde::Deserialize;
use thiserror::Error;

use crate::validation::ValidationReport;

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while building, parsing, or binding model values.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A map entry was added under a key that is already present.
    #[error("Duplicated keys ({key}) are provided for {field}")]
    DuplicateKey { field: &'static str, key: String },

    /// A union was built from zero or several payloads.
    #[error("{union} requires exactly one variant, got {}", describe_set(.set))]
    InvalidUnion {
        union: &'static str,
        set: Vec<&'static str>,
    },

    /// A strict parse met a value outside the documented enum domain.
    #[error("'{value}' is not a known {enum_name} value")]
    UnknownEnumValue {
        enum_name: &'static str,
        value: String,
    },

    /// A URI template placeholder had no value in the request.
    #[error("{operation} requires path parameter {parameter}")]
    MissingPathParameter {
        operation: &'static str,
        parameter: String,
    },

    /// The request violates declared field constraints.
    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    /// No operation with this name exists in the catalog.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// The endpoint could not be combined with the request path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// JSON (de)serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn describe_set(set: &[&'static str]) -> String {
    if set.is_empty() {
        "none".to_string()
    } else {
        set.join(", ")
    }
}

crate::string_enum! {
    /// Error codes returned by the service.
    pub enum ServiceErrorKind {
        AccessDenied => "AccessDeniedException",
        ConcurrentUpdating => "ConcurrentUpdatingException",
        Conflict => "ConflictException",
        DomainNotWhitelisted => "DomainNotWhitelistedException",
        IdentityTypeNotSupported => "IdentityTypeNotSupportedException",
        InternalFailure => "InternalFailureException",
        InvalidNextToken => "InvalidNextTokenException",
        InvalidParameterValue => "InvalidParameterValueException",
        LimitExceeded => "LimitExceededException",
        PreconditionNotMet => "PreconditionNotMetException",
        QuickSightUserNotFound => "QuickSightUserNotFoundException",
        ResourceExists => "ResourceExistsException",
        ResourceNotFound => "ResourceNotFoundException",
        ResourceUnavailable => "ResourceUnavailableException",
        SessionLifetimeInMinutesInvalid => "SessionLifetimeInMinutesInvalidException",
        Throttling => "ThrottlingException",
        UnsupportedUserEdition => "UnsupportedUserEditionException",
    }
}

impl ServiceErrorKind {
    /// Resolve an error code as sent by the service.
    ///
    /// Codes may arrive namespaced (`com.amazonaws.quicksight#ThrottlingException`)
    /// or suffixed with a documentation URL (`ThrottlingException:http://...`).
    pub fn from_code(code: &str) -> Self {
        let code = code.rsplit('#').next().unwrap_or(code);
        let code = code.split(':').next().unwrap_or(code);
        Self::from(code.trim())
    }
}

/// A decoded service error response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} ({status}): {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
pub struct ServiceError {
    pub kind: ServiceErrorKind,
    pub message: String,
    pub request_id: Option<String>,
    pub status: u16,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type", alias = "code", alias = "Code")]
    code: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
    #[serde(rename = "RequestId")]
    request_id: Option<String>,
}

impl ServiceError {
    /// Decode an error response.
    ///
    /// `error_type` is the value of the `x-amzn-ErrorType` header when present;
    /// it wins over the body's `__type`. Bodies that are not JSON yield an
    /// `Unknown` kind carrying the raw text as the message.
    pub fn from_response(
        status: u16,
        error_type: Option<&str>,
        request_id: Option<&str>,
        body: &[u8],
    ) -> Self {
        let parsed: Option<ErrorBody> = serde_json::from_slice(body).ok();
        let (body_code, message, body_request_id) = match parsed {
            Some(b) => (b.code, b.message, b.request_id),
            None => (
                None,
                Some(String::from_utf8_lossy(body).trim().to_string()),
                None,
            ),
        };

        let kind = error_type
            .map(str::to_string)
            .or(body_code)
            .map(|code| ServiceErrorKind::from_code(&code))
            .unwrap_or_else(|| ServiceErrorKind::Unknown(String::new()));

        Self {
            kind,
            message: message.unwrap_or_default(),
            request_id: request_id.map(str::to_string).or(body_request_id),
            status,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            ServiceErrorKind::Throttling
                | ServiceErrorKind::InternalFailure
                | ServiceErrorKind::ResourceUnavailable
                | ServiceErrorKind::ConcurrentUpdating
        ) || Self::is_retryable_status(self.status)
    }

    /// Check if an HTTP status code is retryable.
    ///
    /// Retryable status codes:
    /// - 429: Too Many Requests (throttling)
    /// - 500: Internal failure reported by the service
    /// - 502, 503, 504: transient gateway and availability errors
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 500 | 502 | 503 | 504)
    }

    /// Check if this error means the addressed resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            ServiceErrorKind::ResourceNotFound | ServiceErrorKind::QuickSightUserNotFound
        ) || self.status == 404
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_message_names_field_and_key() {
        let err = ModelError::DuplicateKey {
            field: "PhysicalTableMap",
            key: "t1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Duplicated keys (t1) are provided for PhysicalTableMap"
        );
    }

    #[test]
    fn test_invalid_union_message_lists_variants() {
        let err = ModelError::InvalidUnion {
            union: "DataSourceParameters",
            set: vec!["AthenaParameters", "RedshiftParameters"],
        };
        assert!(err.to_string().contains("AthenaParameters, RedshiftParameters"));

        let err = ModelError::InvalidUnion {
            union: "DataSourceParameters",
            set: vec![],
        };
        assert!(err.to_string().ends_with("got none"));
    }

    #[test]
    fn test_from_code_strips_namespace_and_suffix() {
        assert_eq!(
            ServiceErrorKind::from_code("com.amazonaws.quicksight#ThrottlingException"),
            ServiceErrorKind::Throttling
        );
        assert_eq!(
            ServiceErrorKind::from_code("ResourceNotFoundException:http://internal.amazon.com/"),
            ServiceErrorKind::ResourceNotFound
        );
        assert_eq!(
            ServiceErrorKind::from_code("SomethingNewException"),
            ServiceErrorKind::Unknown("SomethingNewException".to_string())
        );
    }

    #[test]
    fn test_from_response_prefers_header_code() {
        let body = br#"{"__type":"ConflictException","Message":"busy","RequestId":"r-body"}"#;
        let err = ServiceError::from_response(409, Some("ThrottlingException"), None, body);
        assert_eq!(err.kind, ServiceErrorKind::Throttling);
        assert_eq!(err.message, "busy");
        assert_eq!(err.request_id.as_deref(), Some("r-body"));
    }

    #[test]
    fn test_from_response_non_json_body() {
        let err = ServiceError::from_response(502, None, Some("r-1"), b"Bad Gateway\n");
        assert_eq!(err.kind, ServiceErrorKind::Unknown(String::new()));
        assert_eq!(err.message, "Bad Gateway");
        assert_eq!(err.request_id.as_deref(), Some("r-1"));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_error_is_retryable() {
        let err = ServiceError::from_response(400, Some("ThrottlingException"), None, b"{}");
        assert!(err.is_retryable());

        let err = ServiceError::from_response(409, Some("ConcurrentUpdatingException"), None, b"{}");
        assert!(err.is_retryable());

        let err = ServiceError::from_response(400, Some("InvalidParameterValueException"), None, b"{}");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_is_not_found() {
        let err = ServiceError::from_response(404, Some("ResourceNotFoundException"), None, b"{}");
        assert!(err.is_not_found());

        let err = ServiceError::from_response(403, Some("AccessDeniedException"), None, b"{}");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_is_retryable_status_retryable() {
        assert!(ServiceError::is_retryable_status(429));
        assert!(ServiceError::is_retryable_status(500));
        assert!(ServiceError::is_retryable_status(503));
    }

    #[test]
    fn test_is_retryable_status_not_retryable() {
        assert!(!ServiceError::is_retryable_status(400));
        assert!(!ServiceError::is_retryable_status(404));
        assert!(!ServiceError::is_retryable_status(409));
    }
}
