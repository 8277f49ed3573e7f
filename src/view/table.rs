use html_escape::{encode_double_quoted_attribute, encode_text};
use serde_json::Value;

use crate::rest::models::{Row, RowId, TableContents};
use crate::rest::RemoteOperationFailure;

pub const ID_COLUMN: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Column {
    name: String,
    data_type: String,
}

/// Ordered column names and types of a table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSchema {
    columns: Vec<Column>,
}

impl TableSchema {
    pub fn try_new(
        column_names: Vec<String>,
        column_types: Vec<String>,
    ) -> Result<Self, RemoteOperationFailure> {
        if column_names.len() != column_types.len() {
            return Err(RemoteOperationFailure::new(format!(
                "Malformed table schema: {} column names but {} column types",
                column_names.len(),
                column_types.len()
            )));
        }

        Ok(Self {
            columns: column_names
                .into_iter()
                .zip(column_types)
                .map(|(name, data_type)| Column { name, data_type })
                .collect(),
        })
    }

    /// Header labels: the row id, then `name:type` for every column
    pub fn header(&self) -> Vec<String> {
        std::iter::once(ID_COLUMN.to_string())
            .chain(
                self.columns
                    .iter()
                    .map(|c| format!("{}:{}", c.name, c.data_type)),
            )
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub id: RowId,
    pub cells: Vec<String>,
}

impl From<&Row> for RenderedRow {
    fn from(row: &Row) -> Self {
        Self {
            id: row.id.clone(),
            cells: row.data.iter().map(cell_text).collect(),
        }
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn dom_row_id(id: &RowId) -> String {
    format!("row-{id}")
}

/// The rendered `#table` element: a header derived from the schema and the
/// rows in the order they were listed or appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowTable {
    schema: TableSchema,
    rows: Vec<RenderedRow>,
}

impl RowTable {
    /// Replace the whole table with the contents of a list response
    pub fn load(&mut self, contents: &TableContents) -> Result<(), RemoteOperationFailure> {
        let schema = TableSchema::try_new(
            contents.column_names.clone(),
            contents.columns_types.clone(),
        )?;

        self.schema = schema;
        self.rows = contents.rows.iter().map(RenderedRow::from).collect();
        Ok(())
    }

    pub fn header(&self) -> Vec<String> {
        self.schema.header()
    }

    pub fn rows(&self) -> &[RenderedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn append(&mut self, row: &Row) {
        self.rows.push(row.into());
    }

    /// Remove the one row with this id. Returns false if there was none.
    pub fn remove(&mut self, id: &RowId) -> bool {
        match self.rows.iter().position(|r| &r.id == id) {
            Some(index) => {
                self.rows.remove(index);
                true
            }
            None => false,
        }
    }

    /// Overwrite the cells of the row with the same id, keeping its position
    pub fn replace(&mut self, row: &Row) -> bool {
        match self.rows.iter_mut().find(|r| r.id == row.id) {
            Some(existing) => {
                *existing = row.into();
                true
            }
            None => false,
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<table id="table"><thead><tr>"#);
        for label in self.header() {
            html.push_str(&format!(r#"<th scope="col">{}</th>"#, encode_text(&label)));
        }
        html.push_str("</tr></thead><tbody>");

        for row in &self.rows {
            html.push_str(&format!(
                r#"<tr id="{}"><td>{}</td>"#,
                encode_double_quoted_attribute(&dom_row_id(&row.id)),
                encode_text(&row.id.to_string())
            ));
            for cell in &row.cells {
                html.push_str(&format!("<td>{}</td>", encode_text(cell)));
            }
            html.push_str("</tr>");
        }

        html.push_str("</tbody></table>");
        html
    }
}
