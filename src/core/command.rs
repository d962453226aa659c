use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use uuid::Uuid;
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    DuplicateKey {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::DuplicateKey { message } => {
                write!(f, "duplicate key: {}", message)
            }
            CommandError::Validation { message, reason_code } => {
                write!(f, "validation failed: {} {:?}", message, reason_code)
            }
        }
    }
}

impl Error for CommandError {}

// Book ids arrive as text from requests.
pub(crate) fn parse_book_id(book_id: &str) -> Result<Uuid, CommandError> {
    Uuid::parse_str(book_id).map_err(|err| CommandError::Validation {
        message: format!("invalid book id {}: {}", book_id, err),
        reason_code: Some("400".to_string()),
    })
}
