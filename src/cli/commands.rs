use std::str::FromStr;

use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;

use crate::view::pretty::string_batch;

/// Commands available inside the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Show,
    Html,
    Reload,
    Databases,
    Use(String),
    Open(String),
    Back,
    Create(String),
    Delete(String),
    Update(String, String),
    Get(String),
    Save,
}

const COMMANDS: &[(&str, &str)] = &[
    ("\\q", "Quit"),
    ("\\?", "Show this help"),
    ("\\dbs", "Open the database list"),
    ("\\use <database>", "Open the table list of a database"),
    ("\\open <table>", "Open the rows of a table in the current database"),
    ("\\back", "Go up one page"),
    ("\\r", "Reload the current page"),
    ("\\l", "Print the current page"),
    ("\\html", "Print the current page as HTML"),
    (
        "\\create <args>",
        "Create a database <name>, a table <name> <columns>, or a row <values>",
    ),
    ("\\delete <arg>", "Delete a database, a table or a row by id"),
    ("\\update <id> <values>", "Replace the values of a row"),
    ("\\get <id>", "Show a single row"),
    ("\\save", "Persist all databases on the server"),
];

/// Bare command names, for completion
pub const COMMAND_NAMES: &[&str] = &[
    "q", "quit", "?", "dbs", "use", "open", "back", "r", "l", "html", "create",
    "delete", "update", "get", "save",
];

pub fn all_commands_info() -> Result<RecordBatch, ArrowError> {
    let rows = COMMANDS
        .iter()
        .map(|(command, description)| vec![command.to_string(), description.to_string()])
        .collect::<Vec<_>>();
    string_batch(&["Command".to_string(), "Description".to_string()], &rows)
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (c, arg) = if let Some((a, b)) = s.split_once(' ') {
            (a, Some(b.trim()))
        } else {
            (s, None)
        };
        Ok(match (c, arg) {
            ("q", None) | ("quit", None) => Self::Quit,
            ("?", None) => Self::Help,
            ("l", None) => Self::Show,
            ("html", None) => Self::Html,
            ("r", None) => Self::Reload,
            ("dbs", None) => Self::Databases,
            ("use", Some(database)) => Self::Use(database.into()),
            ("open", Some(table)) => Self::Open(table.into()),
            ("back", None) => Self::Back,
            // Arguments go to the server as typed, empty ones included
            ("create", arg) => Self::Create(arg.unwrap_or_default().into()),
            ("delete", arg) => Self::Delete(arg.unwrap_or_default().into()),
            ("update", Some(args)) => match args.split_once(' ') {
                Some((id, data)) => Self::Update(id.into(), data.trim().into()),
                None => Self::Update(args.into(), String::new()),
            },
            ("get", Some(id)) => Self::Get(id.into()),
            ("save", None) => Self::Save,
            _ => return Err(()),
        })
    }
}
