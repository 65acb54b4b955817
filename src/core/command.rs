use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    InvalidArgument {
        message: String,
        reason_code: Option<String>,
    },
    Overflow {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

pub trait Command<Request, Response> {
    fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::InvalidArgument { message, reason_code } => {
                CommandError::InvalidArgument { message, reason_code }
            }
            LibraryError::Overflow { message } => {
                CommandError::Overflow { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArgument { message, .. } => write!(f, "invalid argument: {}", message),
            CommandError::Overflow { message } => write!(f, "overflow: {}", message),
            CommandError::Runtime { message, .. } => write!(f, "runtime: {}", message),
            CommandError::Serialization { message } => write!(f, "serialization: {}", message),
            CommandError::Validation { message, .. } => write!(f, "validation: {}", message),
        }
    }
}

impl std::error::Error for CommandError {}
