use std::sync::Arc;

use tracing::{debug, warn};

use super::{report, report_failure};
use crate::rest::models::{Row, RowId, RowReply, TableContents};
use crate::rest::{call, call_reply, ResourcePath, RestClient, RestRequest};
use crate::view::{RowTable, StatusBanner};

const ROW_DATA_PARAM: &str = "row_data";
const ROW_ID_PARAM: &str = "row_id";

/// The page of a single table: its schema as the header, its rows as the body
#[derive(Debug)]
pub struct RowListController {
    client: Arc<dyn RestClient>,
    database: String,
    table: String,
    rows: RowTable,
    status: StatusBanner,
}

impl RowListController {
    pub fn new(
        client: Arc<dyn RestClient>,
        database: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            client,
            database: database.into(),
            table: table.into(),
            rows: RowTable::default(),
            status: StatusBanner::default(),
        }
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn rows(&self) -> &RowTable {
        &self.rows
    }

    pub fn status(&self) -> &StatusBanner {
        &self.status
    }

    fn rows_path(&self) -> ResourcePath {
        ResourcePath::rows(&self.database, &self.table)
    }

    pub async fn load(&mut self) {
        let request = RestRequest::get(ResourcePath::table(&self.database, &self.table));
        let loaded = match call::<TableContents>(self.client.as_ref(), request).await {
            Ok(contents) => self.rows.load(&contents).map(|_| contents.rows.len()),
            Err(failure) => Err(failure),
        };

        match loaded {
            Ok(count) => debug!(
                "Loaded {} rows of {}.{}",
                count, self.database, self.table
            ),
            Err(failure) => report_failure(&mut self.status, failure),
        }
    }

    /// Insert a row from its raw value list, e.g. `1, 'x'`
    pub async fn create(&mut self, row_data: &str) {
        let request =
            RestRequest::post(self.rows_path()).with_param(ROW_DATA_PARAM, row_data);
        let outcome = call_reply::<RowReply>(self.client.as_ref(), request).await;

        match report(&mut self.status, outcome) {
            Some(RowReply { row: Some(row), .. }) => self.rows.append(&row),
            Some(RowReply { row: None, .. }) => self.reload_without_row().await,
            None => {}
        }
    }

    pub async fn delete(&mut self, row_id: &str) {
        let request =
            RestRequest::delete(self.rows_path()).with_param(ROW_ID_PARAM, row_id);
        let outcome = call_reply::<RowReply>(self.client.as_ref(), request).await;

        if let Some(reply) = report(&mut self.status, outcome) {
            let id = match reply.row {
                Some(row) => row.id,
                None => RowId::from(row_id),
            };
            if !self.rows.remove(&id) {
                warn!("Deleted row {} wasn't displayed", id);
            }
        }
    }

    pub async fn update(&mut self, row_id: &str, row_data: &str) {
        let request = RestRequest::put(self.rows_path())
            .with_param(ROW_ID_PARAM, row_id)
            .with_param(ROW_DATA_PARAM, row_data);
        let outcome = call_reply::<RowReply>(self.client.as_ref(), request).await;

        match report(&mut self.status, outcome) {
            Some(RowReply { row: Some(row), .. }) => {
                if !self.rows.replace(&row) {
                    warn!("Updated row {} wasn't displayed", row.id);
                }
            }
            Some(RowReply { row: None, .. }) => self.reload_without_row().await,
            None => {}
        }
    }

    /// Look up a single row. The table view is left as it is.
    pub async fn fetch(&mut self, row_id: &str) -> Option<Row> {
        let request =
            RestRequest::get(self.rows_path()).with_param(ROW_ID_PARAM, row_id);
        match call::<Row>(self.client.as_ref(), request).await {
            Ok(row) => Some(row),
            Err(failure) => {
                report_failure(&mut self.status, failure);
                None
            }
        }
    }

    // The server confirmed the change but didn't say what the row looks like now
    async fn reload_without_row(&mut self) {
        debug!("Reply carried no row, reloading {}.{}", self.database, self.table);
        self.load().await;
    }
}
