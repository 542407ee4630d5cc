pub mod errors;

use errors::CmdLineError;
use indexmap::IndexMap;

/// A command line broken down into switches, their options, and targets.
///
/// A *switch* is any token with a leading dash (`-d`, `--dir`). An *option*
/// is a value token owned by the most recently seen switch; a switch may own
/// any number of options (`--port 8080 8585 9090`). A *target* is a value
/// token seen before any switch, in input order.
///
/// Every value token lands in exactly one place: either one switch's option
/// list or the target list. Repeating a switch token replaces its earlier
/// option list wholesale (last occurrence wins); the lists are not merged.
#[derive(Debug, Clone, Default)]
pub struct ParsedCommand {
    switches: IndexMap<String, Vec<String>>,
    targets: Vec<String>,
}

impl ParsedCommand {
    /// Parses a raw argument list. Never fails: an empty input yields an
    /// empty command, and a lone `-` is an (unusual but valid) switch key.
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut switches: IndexMap<String, Vec<String>> = IndexMap::new();
        let mut targets = Vec::new();

        // Two states: no active switch yet, or accumulating options for one.
        let mut active: Option<String> = None;
        let mut options: Vec<String> = Vec::new();

        for token in tokens {
            let token = token.into();
            if token.starts_with('-') {
                if let Some(key) = active.take() {
                    switches.insert(key, std::mem::take(&mut options));
                }
                active = Some(token);
            } else {
                match active {
                    Some(_) => options.push(token),
                    None => targets.push(token),
                }
            }
        }

        // The final switch's options must be flushed too; skipping this
        // silently drops the last switch from the command.
        if let Some(key) = active {
            switches.insert(key, options);
        }

        ParsedCommand { switches, targets }
    }

    pub fn is_switch_present(&self, key: &str) -> bool {
        self.switches.contains_key(key)
    }

    /// The option list for a switch key.
    pub fn value_list(&self, key: &str) -> Result<&[String], CmdLineError> {
        self.switches
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| CmdLineError::SwitchNotFound(key.to_string()))
    }

    /// Resolves a set of alias spellings for one logical switch (e.g. `-l`
    /// and `--lang`) to whichever spelling was actually used. The caller's
    /// order is the precedence order when more than one alias was supplied.
    pub fn key_for_aliases<'a>(&self, aliases: &[&'a str]) -> Option<&'a str> {
        aliases
            .iter()
            .copied()
            .find(|alias| self.switches.contains_key(*alias))
    }

    /// The first option value for whichever of `aliases` is present, or
    /// `None` when no alias was used. A present switch with no value is a
    /// `MissingValue` error.
    pub fn single_value(&self, aliases: &[&str]) -> Result<Option<&str>, CmdLineError> {
        let Some(key) = self.key_for_aliases(aliases) else {
            return Ok(None);
        };
        let values = self.value_list(key)?;
        match values.first() {
            Some(value) => Ok(Some(value)),
            None => Err(CmdLineError::MissingValue(key.to_string())),
        }
    }

    pub fn switches(&self) -> &IndexMap<String, Vec<String>> {
        &self.switches
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }
}
