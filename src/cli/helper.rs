use rustyline::completion::Completer;
use rustyline::completion::Pair;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Context;
use rustyline::Helper;
use rustyline::Result;

use super::commands::COMMAND_NAMES;

pub struct CliHelper {}

// The accompanying helper for DbmsCli.
// Every line is a complete command, so all it adds is command name completion.
impl CliHelper {
    fn command_candidates(&self, prefix: &str) -> Vec<Pair> {
        match prefix.strip_prefix('\\') {
            Some(partial) if !partial.contains(' ') => COMMAND_NAMES
                .iter()
                .filter(|name| name.starts_with(partial))
                .map(|name| Pair {
                    display: format!("\\{name}"),
                    replacement: format!("\\{name}"),
                })
                .collect(),
            _ => vec![],
        }
    }
}

impl Highlighter for CliHelper {}

impl Hinter for CliHelper {
    type Hint = String;
}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix.len() - prefix.trim_start().len();
        Ok((start, self.command_candidates(prefix.trim_start())))
    }
}

impl Validator for CliHelper {}

impl Helper for CliHelper {}
