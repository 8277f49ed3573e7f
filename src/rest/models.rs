use std::fmt::{Display, Formatter};

use serde::Deserialize;
use serde_json::Value;

/// Body of every non-2xx response from the REST API.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
}

/// Reply to a create/delete/save call that carries nothing but a message.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct StatusReply {
    #[serde(default)]
    pub message: String,
}

/// Reply to a row create/update/delete call. Older servers only send the message.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RowReply {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub row: Option<Row>,
}

/// Full contents of a table as returned by `GET /rest/database/{db}/table/{table}`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TableContents {
    pub column_names: Vec<String>,
    pub columns_types: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Row {
    pub id: RowId,
    #[serde(default)]
    pub data: Vec<Value>,
}

/// Server-assigned row identifier. Opaque to the console: it is only ever
/// displayed and compared.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Text(String),
}

impl RowId {
    /// Whether this id is the one a user typed in, e.g. `1` for `RowId::Int(1)`.
    pub fn matches(&self, raw: &str) -> bool {
        self.to_string() == raw.trim()
    }
}

impl Display for RowId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for RowId {
    fn from(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(id) => Self::Int(id),
            Err(_) => Self::Text(raw.to_string()),
        }
    }
}
