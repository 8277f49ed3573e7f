use std::sync::Arc;

use tracing::debug;

use super::{report, report_failure};
use crate::rest::models::StatusReply;
use crate::rest::{call, call_reply, ResourcePath, RestClient, RestRequest};
use crate::view::{OptionList, StatusBanner};

pub const TABLE_SELECT_ID: &str = "edit_delete_table_name";

/// The page of a single database: the tables inside it
#[derive(Debug)]
pub struct TableListController {
    client: Arc<dyn RestClient>,
    database: String,
    tables: OptionList,
    status: StatusBanner,
}

impl TableListController {
    pub fn new(client: Arc<dyn RestClient>, database: impl Into<String>) -> Self {
        Self {
            client,
            database: database.into(),
            tables: OptionList::new(TABLE_SELECT_ID),
            status: StatusBanner::default(),
        }
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn tables(&self) -> &OptionList {
        &self.tables
    }

    pub fn status(&self) -> &StatusBanner {
        &self.status
    }

    pub async fn load(&mut self) {
        let request = RestRequest::get(ResourcePath::tables(&self.database));
        match call::<Vec<String>>(self.client.as_ref(), request).await {
            Ok(names) => {
                debug!("Loaded {} tables of {}", names.len(), self.database);
                self.tables.replace_all(names);
            }
            Err(failure) => report_failure(&mut self.status, failure),
        }
    }

    /// Create a table from a raw column definition string, e.g. `a int, b str`
    pub async fn create(&mut self, name: &str, sql: &str) {
        let request = RestRequest::post(ResourcePath::table(&self.database, name))
            .with_param("sql", sql);
        let outcome = call_reply::<StatusReply>(self.client.as_ref(), request).await;

        if report(&mut self.status, outcome).is_some() {
            self.tables.append(name);
        }
    }

    pub async fn delete(&mut self, name: &str) {
        let request = RestRequest::delete(ResourcePath::table(&self.database, name));
        let outcome = call_reply::<StatusReply>(self.client.as_ref(), request).await;

        if report(&mut self.status, outcome).is_some() {
            self.tables.remove(name);
        }
    }
}
