use std::sync::Arc;

use super::report;
use crate::rest::models::StatusReply;
use crate::rest::{call_reply, ResourcePath, RestClient, RestRequest};
use crate::view::StatusBanner;

/// The "save" button of the page layout: asks the server to persist everything
#[derive(Debug)]
pub struct PersistenceTrigger {
    client: Arc<dyn RestClient>,
    status: StatusBanner,
}

impl PersistenceTrigger {
    pub fn new(client: Arc<dyn RestClient>) -> Self {
        Self {
            client,
            status: StatusBanner::default(),
        }
    }

    pub fn status(&self) -> &StatusBanner {
        &self.status
    }

    pub async fn save(&mut self) {
        let request = RestRequest::post(ResourcePath::save());
        let outcome = call_reply::<StatusReply>(self.client.as_ref(), request).await;
        report(&mut self.status, outcome);
    }
}
