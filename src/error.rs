use thiserror::Error;

use crate::cmdline::errors::CmdLineError;
use crate::dispatch::errors::DispatchError;
use crate::lang::errors::LangError;
use crate::page::errors::PageError;
use crate::select::errors::SelectError;

#[derive(Debug, Error)]
pub enum CodePrintError {
    #[error(transparent)]
    CmdLine(#[from] CmdLineError),

    #[error(transparent)]
    Lang(#[from] LangError),

    #[error(transparent)]
    Select(#[from] SelectError),

    #[error(transparent)]
    Page(#[from] PageError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("Cannot read '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("While printing '{path}': {source}")]
    InFile {
        path: String,
        #[source]
        source: Box<CodePrintError>,
    },
}
