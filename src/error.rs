//! Error handling for wordgen

use std::io;

use thiserror::Error;

/// Main error type for wordgen
#[derive(Error, Debug, Clone)]
pub enum WordgenError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid length '{input}': {message}")]
    Length { input: String, message: String },

    #[error("Can't open {path}: {message}")]
    Output { path: String, message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Out of memory: {message}")]
    ResourceExhausted { message: String },

    #[error("Write failed: {message}")]
    Sink { message: String, kind: io::ErrorKind },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Coarse classification used by the top-level handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Detected before enumeration starts
    Configuration,
    /// Allocation failure
    Resource,
    /// The output sink rejected a write
    Sink,
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Configuration => write!(f, "configuration"),
            ErrorCategory::Resource => write!(f, "resource"),
            ErrorCategory::Sink => write!(f, "sink"),
            ErrorCategory::Internal => write!(f, "internal"),
        }
    }
}

impl WordgenError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a length specification error
    pub fn length(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Length {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create an output destination error
    pub fn output(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Output {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a resource exhaustion error
    pub fn resource_exhausted(message: impl Into<String>) -> Self {
        Self::ResourceExhausted {
            message: message.into(),
        }
    }

    /// Wrap a failed write or flush on the output sink
    pub fn sink(err: &io::Error) -> Self {
        Self::Sink {
            message: err.to_string(),
            kind: err.kind(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config { .. }
            | Self::Length { .. }
            | Self::Output { .. }
            | Self::Parse { .. }
            | Self::Io { .. } => ErrorCategory::Configuration,
            Self::ResourceExhausted { .. } => ErrorCategory::Resource,
            Self::Sink { .. } => ErrorCategory::Sink,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// True when the reader on the other end of the sink went away
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            Self::Sink {
                kind: io::ErrorKind::BrokenPipe,
                ..
            }
        )
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your options and profile file", message)
            }
            Self::Length { input, message } => {
                format!("❌ Invalid length '{}': {}\n💡 Use LEN or MIN-MAX, e.g. -l 6 or -l 4-8", input, message)
            }
            Self::Output { path, message } => {
                format!("❌ Can't open {}: {}\n💡 Check file permissions and paths", path, message)
            }
            Self::Parse { message } => {
                format!("❌ Parse error: {}\n💡 Profiles are JSON objects, see --print-config", message)
            }
            Self::ResourceExhausted { message } => {
                format!("❌ Out of memory: {}\n💡 Try a shorter maximum length", message)
            }
            Self::Sink { message, .. } => {
                format!("❌ Write failed: {}\n💡 Check free disk space and the receiving end of the pipe", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

impl From<serde_json::Error> for WordgenError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

impl From<std::collections::TryReserveError> for WordgenError {
    fn from(err: std::collections::TryReserveError) -> Self {
        Self::resource_exhausted(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordgenError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::WordgenError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::WordgenError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! internal_error {
    ($msg:expr) => {
        $crate::error::WordgenError::internal($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::WordgenError::internal(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(
            WordgenError::length("0", "length must be greater than 0").category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            WordgenError::resource_exhausted("counter").category(),
            ErrorCategory::Resource
        );
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err = WordgenError::sink(&io_err);
        assert_eq!(err.category(), ErrorCategory::Sink);
        assert!(err.is_broken_pipe());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_user_message_mentions_path() {
        let err = WordgenError::output("/nope/words.txt", "No such file or directory");
        assert!(err.user_message().contains("/nope/words.txt"));
        assert!(err.to_string().starts_with("Can't open"));
    }

    #[test]
    fn test_parse_error_message() {
        let err = WordgenError::parse("profile.json: expected value at line 1 column 1");
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_message().contains("profile.json"));
    }

    #[test]
    fn test_macros() {
        let err = config_error!("bad {}", "value");
        assert!(err.to_string().contains("bad value"));
        let err = internal_error!("odometer");
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
