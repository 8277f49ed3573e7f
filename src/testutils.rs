use std::sync::Arc;

use serde_json::json;
use wiremock::{MockServer, ResponseTemplate};

use crate::config::schema::Rest;
use crate::rest::{HttpRestClient, RestClient};

pub fn client_for(server: &MockServer) -> Arc<dyn RestClient> {
    Arc::new(
        HttpRestClient::try_new(&Rest {
            base_url: server.uri(),
            timeout_secs: Some(5),
        })
        .unwrap(),
    )
}

pub fn reply(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

pub fn message(message: &str) -> ResponseTemplate {
    reply(json!({ "message": message }))
}

/// A success with no body at all
pub fn no_content() -> ResponseTemplate {
    ResponseTemplate::new(204)
}

pub fn failure(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_json(json!({ "message": message }))
}
