use std::path::PathBuf;
use std::time::Duration;

use crate::cmdline::ParsedCommand;
use crate::cmdline::errors::CmdLineError;
use crate::commands::PrintRequest;
use crate::page::PageGeometry;

pub const HELP: &[&str] = &["-h", "--help"];
pub const VERSION: &[&str] = &["-v", "--version"];
pub const WARRANTY: &[&str] = &["-w", "--warranty"];
pub const LANGUAGES: &[&str] = &["--languages"];
pub const DIR: &[&str] = &["-d", "--dir"];
pub const LANG: &[&str] = &["-l", "--lang"];
pub const LINES_PER_PAGE: &[&str] = &["-p", "--lines-per-page"];
pub const PAGE_WIDTH: &[&str] = &["--page-width"];
pub const TIMEOUT: &[&str] = &["--timeout"];
pub const STATS: &[&str] = &["--stats"];
pub const QUIET: &[&str] = &["--quiet"];

pub const DEFAULT_LINES_PER_PAGE: usize = 60;
pub const DEFAULT_PAGE_WIDTH: usize = 80;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// What one invocation asks for. Help, version and warranty are terminal
/// actions; `Print` carries a full request.
#[derive(Debug)]
pub enum Directive {
    Help,
    Version,
    Warranty,
    Languages,
    Print {
        request: PrintRequest,
        detailed_stats: bool,
        quiet: bool,
    },
}

/// Resolves a parsed command line into a directive.
///
/// A print run needs both the directory and the language switch; either
/// one alone, or neither plus no terminal action, is a usage error.
pub fn resolve(cmd: &ParsedCommand) -> Result<Directive, CmdLineError> {
    if any_present(cmd, HELP) {
        return Ok(Directive::Help);
    }
    if any_present(cmd, VERSION) {
        return Ok(Directive::Version);
    }
    if any_present(cmd, WARRANTY) {
        return Ok(Directive::Warranty);
    }
    if any_present(cmd, LANGUAGES) {
        return Ok(Directive::Languages);
    }

    let dir = cmd.single_value(DIR)?;
    let lang = cmd.single_value(LANG)?;
    match (dir, lang) {
        (Some(dir), Some(lang)) => {
            let request = PrintRequest {
                root: PathBuf::from(dir),
                language: lang.to_string(),
                geometry: PageGeometry {
                    lines_per_page: numeric_value(cmd, LINES_PER_PAGE, DEFAULT_LINES_PER_PAGE)?,
                    chars_per_page: numeric_value(cmd, PAGE_WIDTH, DEFAULT_PAGE_WIDTH)?,
                },
                completion_timeout: Duration::from_secs(numeric_value(
                    cmd,
                    TIMEOUT,
                    DEFAULT_TIMEOUT_SECS,
                )?),
            };
            Ok(Directive::Print {
                request,
                detailed_stats: any_present(cmd, STATS),
                quiet: any_present(cmd, QUIET),
            })
        }
        (Some(_), None) => Err(CmdLineError::InvalidArguments(
            "a directory was given but no language; add -l/--lang CODE".to_string(),
        )),
        (None, Some(_)) => Err(CmdLineError::InvalidArguments(
            "a language was given but no directory; add -d/--dir PATH".to_string(),
        )),
        (None, None) => Err(CmdLineError::InvalidArguments(
            "nothing to do; a print run needs -d/--dir PATH and -l/--lang CODE".to_string(),
        )),
    }
}

fn any_present(cmd: &ParsedCommand, aliases: &[&str]) -> bool {
    cmd.key_for_aliases(aliases).is_some()
}

fn numeric_value<T>(cmd: &ParsedCommand, aliases: &[&str], default: T) -> Result<T, CmdLineError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match cmd.single_value(aliases)? {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| CmdLineError::InvalidValue {
            switch: cmd
                .key_for_aliases(aliases)
                .unwrap_or(aliases[0])
                .to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        }),
    }
}
