use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    // Raised for caller input that the catalog refuses, including search queries
    // that matched nothing. The reason code tells those cases apart.
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::DuplicateKey { message } => { message.as_str() }
            LibraryError::Validation { message, .. } => { message.as_str() }
        }
    }

    pub fn reason_code(&self) -> Option<&str> {
        match self {
            LibraryError::DuplicateKey { .. } => { None }
            LibraryError::Validation { reason_code, .. } => { reason_code.as_deref() }
        }
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl Error for LibraryError {}

/// A specialized Result type for the catalog and its repositories.
pub type LibraryResult<T> = Result<T, LibraryError>;
