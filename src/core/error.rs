use std::fmt;

use crate::core::change_type::ChangeType;

/// The error type for this application.
#[derive(Debug)]
pub enum AppError {
    /// An I/O error occurred.
    Io(std::io::Error),
    /// A UTF-8 parsing error occurred.
    Utf8(std::string::FromUtf8Error),
    /// The tf client ran but returned a non-zero status.
    TfCommandFailed {
        command: String,
        _stdout: String,
        stderr: String,
    },
    /// An XML parsing error occurred.
    XmlParse(roxmltree::Error),
    /// A pending change is missing the data needed to classify it.
    InvalidInput(String),
    /// The change types of a pending change match no status rule.
    UnresolvedStatus {
        local_item: String,
        change_types: Vec<ChangeType>,
    },
    /// A business logic validation error occurred.
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "I/O Error: {}", err),
            AppError::Utf8(err) => write!(f, "UTF-8 Conversion Error: {}", err),
            AppError::TfCommandFailed { command, _stdout, stderr } => {
                write!(f, "tf command failed: {}", command)?;
                if !stderr.trim().is_empty() {
                    write!(f, "\n{}", stderr.trim())?;
                }
                Ok(())
            }
            AppError::XmlParse(err) => write!(f, "XML Parsing Error: {}", err),
            AppError::InvalidInput(msg) => write!(f, "Invalid pending change: {}", msg),
            AppError::UnresolvedStatus { local_item, change_types } => {
                write!(f, "Unhandled status type for {}: {:?}", local_item, change_types)
            }
            AppError::Validation(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<std::string::FromUtf8Error> for AppError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        AppError::Utf8(err)
    }
}

impl From<roxmltree::Error> for AppError {
    fn from(err: roxmltree::Error) -> Self {
        AppError::XmlParse(err)
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;
