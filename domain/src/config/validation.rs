//! Configuration validation issues.
//!
//! Configuration is checked once at startup. Each problem is reported as a
//! [`ConfigIssue`] with a severity: errors stop the server from starting,
//! warnings are logged and the server runs with reduced functionality.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A required value is empty.
    EmptyValue { field: String },
    /// A URL could not be parsed.
    InvalidUrl { field: String, value: String },
    /// An email address is malformed.
    InvalidAddress { field: String, value: String },
    /// A value is outside its allowed range.
    OutOfRange { field: String, value: String },
    /// Mail credentials are absent, so the contact relay will always fail.
    MissingCredentials,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
