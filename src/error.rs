//! Error types for mdcal

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mdcal
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Invalid year: {0}")]
    InvalidYear(String),

    #[error("Invalid debug flag: {0}")]
    InvalidDebugFlag(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(PathBuf),

    #[error("Template error: {0}")]
    Template(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalendarError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CalendarError::InvalidArguments(_)
            | CalendarError::InvalidYear(_)
            | CalendarError::InvalidDebugFlag(_) => 2,
            CalendarError::TemplateNotFound(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            CalendarError::InvalidArguments(_)
            | CalendarError::InvalidYear(_)
            | CalendarError::InvalidDebugFlag(_) => {
                format!(
                    "{}\n\n\
                    Usage:\n\
                    • mdcal                 (year 2024, debug off)\n\
                    • mdcal <YEAR> <DEBUG>  (DEBUG is true or false)\n\n\
                    Examples:\n\
                    mdcal 2025 false\n\
                    mdcal 2024 TRUE",
                    self
                )
            }
            CalendarError::TemplateNotFound(path) => {
                format!(
                    "Template not found: {}\n\n\
                    Suggestions:\n\
                    • Run mdcal from the directory containing templates/month.txt and templates/day.txt\n\
                    • Point to another template directory with --templates-dir",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using CalendarError
pub type Result<T> = std::result::Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_errors_share_exit_code() {
        assert_eq!(CalendarError::InvalidArguments("x".into()).exit_code(), 2);
        assert_eq!(CalendarError::InvalidYear("x".into()).exit_code(), 2);
        assert_eq!(CalendarError::InvalidDebugFlag("x".into()).exit_code(), 2);
    }

    #[test]
    fn test_template_not_found_exit_code() {
        let err = CalendarError::TemplateNotFound(PathBuf::from("templates/day.txt"));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_io_error_exit_code() {
        let err = CalendarError::from(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_invalid_arguments_shows_usage() {
        let err = CalendarError::InvalidArguments("expected 0 or 2 arguments, got 1".into());
        let msg = err.display_with_suggestions();
        assert!(msg.starts_with("Invalid arguments: expected 0 or 2 arguments, got 1"));
        assert!(msg.contains("mdcal <YEAR> <DEBUG>"));
        assert!(msg.contains("Examples"));
    }

    #[test]
    fn test_template_not_found_suggestions() {
        let err = CalendarError::TemplateNotFound(PathBuf::from("templates/month.txt"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("templates/month.txt"));
        assert!(msg.contains("--templates-dir"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = CalendarError::Template("not valid UTF-8".to_string());
        assert_eq!(
            err.display_with_suggestions(),
            "Template error: not valid UTF-8"
        );
    }
}
