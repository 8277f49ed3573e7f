//! One controller per page: each owns its view state and drives it from the
//! outcome of its REST calls.
mod database;
mod row;
mod save;
mod table;

pub use database::DatabaseListController;
pub use row::RowListController;
pub use save::PersistenceTrigger;
pub use table::TableListController;

use tracing::{info, warn};

use crate::rest::models::{RowReply, StatusReply};
use crate::rest::RemoteOperationFailure;
use crate::view::StatusBanner;

/// A successful reply that carries a message for the success banner
pub trait Reply {
    fn message(&self) -> &str;
}

impl Reply for StatusReply {
    fn message(&self) -> &str {
        &self.message
    }
}

impl Reply for RowReply {
    fn message(&self) -> &str {
        &self.message
    }
}

/// Put the outcome of an operation on the page's banners. Failures stop here:
/// the caller only gets the reply back if there was one.
pub(crate) fn report<T: Reply>(
    status: &mut StatusBanner,
    outcome: Result<T, RemoteOperationFailure>,
) -> Option<T> {
    match outcome {
        Ok(reply) => {
            info!("{}", reply.message());
            status.show_success(reply.message());
            Some(reply)
        }
        Err(failure) => {
            report_failure(status, failure);
            None
        }
    }
}

pub(crate) fn report_failure(status: &mut StatusBanner, failure: RemoteOperationFailure) {
    warn!("Operation failed: {}", failure);
    status.show_error(failure.message);
}
