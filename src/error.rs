//! Error types for contract cases.
//!
//! Every way a contract case can fail is a variant of [`ContractError`]. The
//! variants fall into a handful of [`ErrorCategory`] buckets so a runner can
//! tell a broken contract (assertion, schema) apart from a broken environment
//! (network, configuration).
//!
//! # Error Handling Example
//!
//! ```rust
//! use reqres_contract::{ContractError, error::ErrorCategory};
//!
//! fn describe(err: &ContractError) -> &'static str {
//!     match err.category() {
//!         ErrorCategory::Assertion => "the service answered with unexpected values",
//!         ErrorCategory::Schema => "the response body has the wrong shape",
//!         ErrorCategory::Network => "the service could not be reached",
//!         _ => "the suite itself is misconfigured or the body was unreadable",
//!     }
//! }
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// High-level categorization of errors for reporting decisions.
///
/// Use [`ContractError::category()`] to get the category for any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A status code or field value did not match the expected literal.
    Assertion,

    /// The response body does not conform to its JSON Schema.
    Schema,

    /// The request never produced a response (connection refused, DNS, timeout).
    Network,

    /// The response arrived but its body could not be read or decoded.
    Response,

    /// The suite was set up with an unusable base URL or API key.
    Configuration,
}

// ============================================================================
// Contract error types
// ============================================================================

/// Convenient result type for contract operations.
pub type ContractResult<T> = std::result::Result<T, ContractError>;

/// Errors that can occur while running a contract case.
///
/// Use the constructor methods, which log the error at creation:
///
/// ```rust
/// use reqres_contract::ContractError;
///
/// let err = ContractError::status_mismatch("GET /api/users/2", 200, 404);
/// assert!(!err.is_network());
/// ```
///
/// | Variant | Category |
/// |---------|----------|
/// | `ConfigurationError` | Configuration |
/// | `RequestFailed` | Network |
/// | `Timeout` | Network |
/// | `ResponseParsingError` | Response |
/// | `StatusMismatch` | Assertion |
/// | `FieldMismatch` | Assertion |
/// | `AssertionFailed` | Assertion |
/// | `SchemaValidationFailed` | Schema |
#[derive(Error, Debug)]
pub enum ContractError {
    /// Suite configuration is invalid or incomplete.
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The HTTP request could not be completed.
    #[error("Request to {endpoint} failed: {message}")]
    RequestFailed {
        /// Method and path of the request.
        endpoint: String,
        /// Description of the failure.
        message: String,
        /// The underlying transport error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The HTTP request timed out.
    #[error("Request to {endpoint} timed out")]
    Timeout {
        /// Method and path of the request.
        endpoint: String,
    },

    /// The response body could not be read or decoded.
    #[error("Response from {endpoint} could not be parsed: {message}")]
    ResponseParsingError {
        /// Method and path of the request.
        endpoint: String,
        /// Details about the parsing failure.
        message: String,
    },

    /// The service answered with an unexpected status code.
    #[error("{endpoint} returned status {actual}, expected {expected}")]
    StatusMismatch {
        /// Method and path of the request.
        endpoint: String,
        /// The status the case requires.
        expected: u16,
        /// The status the service returned.
        actual: u16,
    },

    /// A body field holds an unexpected value.
    #[error("Field {field} is {actual}, expected {expected}")]
    FieldMismatch {
        /// Dotted path of the field, e.g. `data.email`.
        field: String,
        /// The expected value, rendered as JSON.
        expected: String,
        /// The actual value, rendered as JSON.
        actual: String,
    },

    /// Any other assertion over the response did not hold.
    #[error("Assertion failed: {message}")]
    AssertionFailed {
        /// What was expected and not found.
        message: String,
    },

    /// The response body violates its JSON Schema.
    #[error("Response does not match schema {schema}: {}", .violations.join("; "))]
    SchemaValidationFailed {
        /// Name of the schema the body was checked against.
        schema: String,
        /// One message per violation.
        violations: Vec<String>,
    },
}

impl ContractError {
    /// Get the error category for reporting decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Configuration,
            Self::RequestFailed { .. } => ErrorCategory::Network,
            Self::Timeout { .. } => ErrorCategory::Network,
            Self::ResponseParsingError { .. } => ErrorCategory::Response,
            Self::StatusMismatch { .. } => ErrorCategory::Assertion,
            Self::FieldMismatch { .. } => ErrorCategory::Assertion,
            Self::AssertionFailed { .. } => ErrorCategory::Assertion,
            Self::SchemaValidationFailed { .. } => ErrorCategory::Schema,
        }
    }

    /// Whether the request never produced a response.
    pub fn is_network(&self) -> bool {
        self.category() == ErrorCategory::Network
    }

    /// Whether the case never got to judge the service.
    ///
    /// Network and configuration errors mean the contract was not exercised,
    /// so runners report them as errored rather than failed.
    pub fn is_environmental(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Network | ErrorCategory::Configuration
        )
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Contract suite configuration invalid"
        );
        Self::ConfigurationError { message }
    }

    pub fn request_failed(
        endpoint: impl Into<String>,
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let endpoint = endpoint.into();
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            endpoint = %endpoint,
            message = %message,
            has_source = source.is_some(),
            "HTTP request failed"
        );
        Self::RequestFailed {
            endpoint,
            message,
            source,
        }
    }

    pub fn timeout(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        log_warn!(
            error_type = "timeout",
            endpoint = %endpoint,
            "HTTP request timed out"
        );
        Self::Timeout { endpoint }
    }

    pub fn response_parsing_error(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            endpoint = %endpoint,
            message = %message,
            "Response body could not be parsed"
        );
        Self::ResponseParsingError { endpoint, message }
    }

    pub fn status_mismatch(endpoint: impl Into<String>, expected: u16, actual: u16) -> Self {
        let endpoint = endpoint.into();
        log_warn!(
            error_type = "status_mismatch",
            endpoint = %endpoint,
            expected,
            actual,
            "Unexpected response status"
        );
        Self::StatusMismatch {
            endpoint,
            expected,
            actual,
        }
    }

    pub fn field_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        let field = field.into();
        let expected = expected.into();
        let actual = actual.into();
        log_warn!(
            error_type = "field_mismatch",
            field = %field,
            expected = %expected,
            actual = %actual,
            "Unexpected response field value"
        );
        Self::FieldMismatch {
            field,
            expected,
            actual,
        }
    }

    pub fn assertion_failed(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "assertion_failed",
            message = %message,
            "Response assertion failed"
        );
        Self::AssertionFailed { message }
    }

    pub fn schema_validation_failed(schema: impl Into<String>, violations: Vec<String>) -> Self {
        let schema = schema.into();
        log_warn!(
            error_type = "schema_validation_failed",
            schema = %schema,
            violation_count = violations.len(),
            "Response schema validation failed"
        );
        Self::SchemaValidationFailed { schema, violations }
    }
}
