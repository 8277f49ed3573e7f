use std::sync::Arc;

use tracing::debug;

use super::{report, report_failure};
use crate::rest::models::StatusReply;
use crate::rest::{call, call_reply, ResourcePath, RestClient, RestRequest};
use crate::view::{OptionList, StatusBanner};

pub const DATABASE_SELECT_ID: &str = "edit_delete_database_name";

/// The index page: every database the server knows about
#[derive(Debug)]
pub struct DatabaseListController {
    client: Arc<dyn RestClient>,
    databases: OptionList,
    status: StatusBanner,
}

impl DatabaseListController {
    pub fn new(client: Arc<dyn RestClient>) -> Self {
        Self {
            client,
            databases: OptionList::new(DATABASE_SELECT_ID),
            status: StatusBanner::default(),
        }
    }

    pub fn databases(&self) -> &OptionList {
        &self.databases
    }

    pub fn status(&self) -> &StatusBanner {
        &self.status
    }

    pub async fn load(&mut self) {
        let request = RestRequest::get(ResourcePath::databases());
        match call::<Vec<String>>(self.client.as_ref(), request).await {
            Ok(names) => {
                debug!("Loaded {} databases", names.len());
                self.databases.replace_all(names);
            }
            Err(failure) => report_failure(&mut self.status, failure),
        }
    }

    pub async fn create(&mut self, name: &str) {
        let request = RestRequest::post(ResourcePath::database(name));
        let outcome = call_reply::<StatusReply>(self.client.as_ref(), request).await;

        if report(&mut self.status, outcome).is_some() {
            self.databases.append(name);
        }
    }

    pub async fn delete(&mut self, name: &str) {
        let request = RestRequest::delete(ResourcePath::database(name));
        let outcome = call_reply::<StatusReply>(self.client.as_ref(), request).await;

        if report(&mut self.status, outcome).is_some() {
            self.databases.remove(name);
        }
    }
}
