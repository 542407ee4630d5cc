use thiserror::Error;

use crate::lang::errors::LangError;

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("Path not found: {0}.")]
    PathNotFound(String),

    #[error("Not a file or directory: {0}.")]
    NotADirectory(String),

    #[error(transparent)]
    Lang(#[from] LangError),
}
