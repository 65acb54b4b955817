use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    // The caller passed a value outside the domain of the operation, e.g. a
    // negative number to factorial.
    InvalidArgument {
        message: String,
        reason_code: Option<String>,
    },
    // The result does not fit in the integer representation used by the operation.
    Overflow {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn invalid_argument(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::InvalidArgument { message: message.to_string(), reason_code }
    }

    pub fn overflow(message: &str) -> LibraryError {
        LibraryError::Overflow { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str(), Some(err.kind().to_string()))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InvalidArgument { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Overflow { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the library domain.
pub type LibraryResult<T> = Result<T, LibraryError>;

// OutputFormat selects how listings and logs are rendered
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<String> for OutputFormat {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{LibraryError, OutputFormat};

    #[test]
    fn test_should_create_invalid_argument_error() {
        assert!(matches!(LibraryError::invalid_argument("test", None), LibraryError::InvalidArgument{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_create_overflow_error() {
        assert!(matches!(LibraryError::overflow("test"), LibraryError::Overflow{ message: _ }));
    }

    #[test]
    fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_convert_io_error() {
        let err = LibraryError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert!(matches!(err, LibraryError::Runtime{ message: _, reason_code: Some(_) }));
    }

    #[test]
    fn test_should_display_error() {
        assert_eq!("too big", LibraryError::overflow("too big").to_string());
        assert_eq!("negative Some(\"-1\")",
                   LibraryError::invalid_argument("negative", Some("-1".to_string())).to_string());
    }

    #[test]
    fn test_should_format_output_format() {
        for format in vec![OutputFormat::Text, OutputFormat::Json] {
            let str = format.to_string();
            assert_eq!(format, OutputFormat::from(str));
        }
        assert_eq!(OutputFormat::Json, OutputFormat::from("JSON".to_string()));
        assert_eq!(OutputFormat::Text, OutputFormat::from("yaml".to_string()));
    }
}
