//! Terminal rendering of page views, through Arrow's pretty printer
use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use arrow_schema::{DataType, Field, Schema};

use super::{OptionList, RowTable};

/// Build a batch of nullable string columns. Rows shorter than the header get
/// nulls in the missing cells; cells past the header go into unnamed columns.
pub fn string_batch(
    header: &[String],
    rows: &[Vec<String>],
) -> Result<RecordBatch, ArrowError> {
    let width = std::iter::once(header.len())
        .chain(rows.iter().map(Vec::len))
        .max()
        .unwrap_or_default();

    let schema = Schema::new(
        (0..width)
            .map(|i| {
                let name = header.get(i).map(String::as_str).unwrap_or_default();
                Field::new(name, DataType::Utf8, true)
            })
            .collect::<Vec<_>>(),
    );

    let columns = (0..width)
        .map(|i| {
            Arc::new(StringArray::from(
                rows.iter()
                    .map(|row| row.get(i).map(String::as_str))
                    .collect::<Vec<_>>(),
            )) as ArrayRef
        })
        .collect();

    RecordBatch::try_new(Arc::new(schema), columns)
}

pub fn format_batch(batch: RecordBatch) -> Result<String, ArrowError> {
    Ok(pretty_format_batches(&[batch])?.to_string())
}

pub fn format_options(title: &str, options: &OptionList) -> Result<String, ArrowError> {
    let rows = options
        .options()
        .iter()
        .map(|o| vec![o.clone()])
        .collect::<Vec<_>>();
    format_batch(string_batch(&[title.to_string()], &rows)?)
}

pub fn format_rows(table: &RowTable) -> Result<String, ArrowError> {
    let rows = table
        .rows()
        .iter()
        .map(|row| {
            std::iter::once(row.id.to_string())
                .chain(row.cells.iter().cloned())
                .collect()
        })
        .collect::<Vec<_>>();
    format_batch(string_batch(&table.header(), &rows)?)
}

#[cfg(test)]
mod tests {
    use arrow::array::Array;
    use serde_json::json;

    use super::{format_options, format_rows, string_batch};
    use crate::view::{OptionList, RowTable};

    #[test]
    fn test_format_options() {
        let mut options = OptionList::new("edit_delete_database_name");
        options.append("shop");
        options.append("library");

        assert_eq!(
            format_options("database", &options).unwrap(),
            [
                "+----------+",
                "| database |",
                "+----------+",
                "| shop     |",
                "| library  |",
                "+----------+",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_format_rows() {
        let mut table = RowTable::default();
        table
            .load(
                &serde_json::from_value(json!({
                    "column_names": ["a", "b"],
                    "columns_types": ["int", "text"],
                    "rows": [{"id": 1, "data": [1, "x"]}]
                }))
                .unwrap(),
            )
            .unwrap();

        assert_eq!(
            format_rows(&table).unwrap(),
            [
                "+----+-------+--------+",
                "| id | a:int | b:text |",
                "+----+-------+--------+",
                "| 1  | 1     | x      |",
                "+----+-------+--------+",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_short_rows_are_padded_with_nulls() {
        let batch = string_batch(
            &["id".to_string(), "a:int".to_string()],
            &[vec!["1".to_string()]],
        )
        .unwrap();

        assert_eq!(batch.num_rows(), 1);
        assert_eq!(batch.column(1).null_count(), 1);
    }

    #[test]
    fn test_extra_cells_are_kept() {
        let batch = string_batch(
            &["id".to_string(), "a:int".to_string()],
            &[vec!["1".to_string(), "1".to_string(), "2".to_string()]],
        )
        .unwrap();
        assert_eq!(batch.num_columns(), 3);
        assert_eq!(batch.schema().field(2).name(), "");

        let mut table = RowTable::default();
        table
            .load(
                &serde_json::from_value(json!({
                    "column_names": ["a"],
                    "columns_types": ["int"],
                    "rows": [{"id": 1, "data": [1, 2]}]
                }))
                .unwrap(),
            )
            .unwrap();

        let output = format_rows(&table).unwrap();
        assert!(output.contains("| 1  | 1     | 2 |"), "{output}");
        assert!(table.to_html().contains("<td>1</td><td>1</td><td>2</td>"));
    }
}
