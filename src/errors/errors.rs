use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
#[error("{internal_error}")]
pub struct Error {
    #[source]
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::Usage { .. } => "Usage",
            ErrorImpl::ReadSource { .. } => "ReadSource",
            ErrorImpl::InvalidUtf8 { .. } => "InvalidUtf8",
            ErrorImpl::WriteDump { .. } => "WriteDump",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::Usage { program } => ErrorTip::Suggestion(format!(
                "usage: {} <source-file> [<dump-file>]",
                program
            )),
            ErrorImpl::ReadSource { path, .. } => ErrorTip::Suggestion(format!(
                "Could not read `{}`, does it exist?",
                path.display()
            )),
            ErrorImpl::InvalidUtf8 { path } => ErrorTip::Suggestion(format!(
                "`{}` must be UTF-8 encoded",
                path.display()
            )),
            ErrorImpl::WriteDump { .. } => ErrorTip::None,
        }
    }
}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug)]
pub enum ErrorImpl {
    #[error("expected a source file argument")]
    Usage { program: String },
    #[error("failed to read {path:?}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("source file {path:?} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },
    #[error("failed to write token dump to {path:?}")]
    WriteDump {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
