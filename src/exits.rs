//! BSD sysexits-style status codes, so scripts can tell failure modes
//! apart without parsing stderr.

use crate::error::CodePrintError;
use crate::select::errors::SelectError;

pub const EX_OK: i32 = 0;
/// Missing or conflicting directives, malformed values, bad geometry.
pub const EX_USAGE: i32 = 64;
/// Language code not in the registry.
pub const EX_DATAERR: i32 = 65;
/// Root path missing or not a directory.
pub const EX_NOINPUT: i32 = 66;
/// Print dispatch failure.
pub const EX_IOERR: i32 = 74;

/// Maps an error to its exit status, unwrapping per-file context first.
pub fn code_for(err: &CodePrintError) -> i32 {
    match err {
        CodePrintError::CmdLine(_) => EX_USAGE,
        CodePrintError::Lang(_) => EX_DATAERR,
        CodePrintError::Select(SelectError::Lang(_)) => EX_DATAERR,
        CodePrintError::Select(_) => EX_NOINPUT,
        CodePrintError::Page(_) => EX_USAGE,
        CodePrintError::Dispatch(_) => EX_IOERR,
        CodePrintError::FileRead { .. } => EX_IOERR,
        CodePrintError::InFile { source, .. } => code_for(source),
    }
}
