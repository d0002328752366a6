//! Configuration issues reported by config validation.
//!
//! Validation never fails outright; it returns a list of issues and lets the
//! caller decide whether errors are fatal.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// HTTP timeout of zero seconds.
    ZeroTimeout,
    /// History series of zero points.
    ZeroHistoryPoints,
    /// `dashboard.default_city` is not in the catalog.
    UnknownDefaultCity,
    /// A `dashboard.favorites` entry is not in the catalog.
    UnknownFavorite,
    /// `alerts.min_tier` is not a known severity tier.
    UnknownAlertTier,
}

/// A detected configuration issue.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let err = ConfigIssue::error(ConfigIssueCode::ZeroTimeout, "timeout is 0");
        assert!(err.is_error());
        assert_eq!(err.code, ConfigIssueCode::ZeroTimeout);

        let warn = ConfigIssue::warning(ConfigIssueCode::UnknownFavorite, "Gotham");
        assert!(!warn.is_error());
        assert_eq!(warn.message, "Gotham");
    }
}
