//! Extractor configuration for inbound HTTP adapters.
//!
//! Actix rejects malformed JSON bodies and unparsable path segments before a
//! handler runs. These helpers turn those rejections into the shared
//! [`Error`] envelope so clients see `invalid_request` rather than Actix's
//! plain-text defaults.

use actix_web::{HttpRequest, error::JsonPayloadError, error::PathError, web};
use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MalformedBody,
    InvalidPathParameter,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MalformedBody => "malformed_body",
            ErrorCode::InvalidPathParameter => "invalid_path_parameter",
        }
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    message: String,
}

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn with_reason(self, code: ErrorCode, reason: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "reason": reason.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn malformed_body_error(reason: impl Into<String>) -> Error {
    ValidationError::new("request body must be a valid customer JSON object")
        .with_reason(ErrorCode::MalformedBody, reason)
}

pub(crate) fn invalid_path_error(reason: impl Into<String>) -> Error {
    ValidationError::new("path parameter must be an integer customer id")
        .with_reason(ErrorCode::InvalidPathParameter, reason)
}

/// JSON body extractor settings used by every customer route.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        malformed_body_error(err.to_string()).into()
    })
}

/// Path extractor settings used by every customer route.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, _req: &HttpRequest| {
        invalid_path_error(err.to_string()).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case(malformed_body_error("EOF while parsing"), "malformed_body")]
    #[case(invalid_path_error("invalid digit found in string"), "invalid_path_parameter")]
    fn validation_errors_carry_detail_code(#[case] error: Error, #[case] code: &str) {
        assert_eq!(error.code(), DomainErrorCode::InvalidRequest);
        let details = error.details().expect("details present");
        assert_eq!(details.get("code").and_then(Value::as_str), Some(code));
        assert!(details.get("reason").and_then(Value::as_str).is_some());
    }
}
