//! Client boundary for the DBMS REST API
use std::fmt::{Debug, Display, Formatter};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::schema;

pub mod models;
pub mod paths;

use models::ErrorBody;
pub use paths::ResourcePath;

/// The one failure the console knows about: the operation didn't go through,
/// and here is the message to show for it. Network errors, server-side
/// validation errors and missing resources all end up here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RemoteOperationFailure {
    pub message: String,
}

impl RemoteOperationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for RemoteOperationFailure {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<serde_json::Error> for RemoteOperationFailure {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Failed parsing response: {err}"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientSetupError {
    #[error("Invalid REST base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("REST base URL {0:?} can't have resource paths appended to it")]
    CannotBeABase(String),

    #[error("Failed building the HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Display for Verb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        })
    }
}

impl From<Verb> for Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Delete => Method::DELETE,
        }
    }
}

/// One call against the REST API. Query values are forwarded verbatim (only
/// percent-encoded), the server is the one validating them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestRequest {
    pub verb: Verb,
    pub path: ResourcePath,
    pub query: Vec<(String, String)>,
}

impl RestRequest {
    pub fn new(verb: Verb, path: ResourcePath) -> Self {
        Self {
            verb,
            path,
            query: vec![],
        }
    }

    pub fn get(path: ResourcePath) -> Self {
        Self::new(Verb::Get, path)
    }

    pub fn post(path: ResourcePath) -> Self {
        Self::new(Verb::Post, path)
    }

    pub fn put(path: ResourcePath) -> Self {
        Self::new(Verb::Put, path)
    }

    pub fn delete(path: ResourcePath) -> Self {
        Self::new(Verb::Delete, path)
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }
}

impl Display for RestRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.verb, self.path)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            write!(f, "{}{key}={value}", if i == 0 { '?' } else { '&' })?;
        }
        Ok(())
    }
}

#[async_trait]
pub trait RestClient: Send + Sync + Debug {
    /// Issue a request and return the JSON body of a successful response
    async fn send(&self, request: &RestRequest) -> Result<Value, RemoteOperationFailure>;
}

/// Send a request and decode the successful response into `T`
pub async fn call<T: DeserializeOwned>(
    client: &dyn RestClient,
    request: RestRequest,
) -> Result<T, RemoteOperationFailure> {
    let value = client.send(&request).await?;
    Ok(serde_json::from_value(value)?)
}

/// Like [`call`], for replies that only acknowledge a change: a successful
/// response without a body decodes as `T::default()`
pub async fn call_reply<T: DeserializeOwned + Default>(
    client: &dyn RestClient,
    request: RestRequest,
) -> Result<T, RemoteOperationFailure> {
    match client.send(&request).await? {
        Value::Null => Ok(T::default()),
        value => Ok(serde_json::from_value(value)?),
    }
}

#[derive(Debug, Clone)]
pub struct HttpRestClient {
    client: Client,
    base_url: Url,
}

impl HttpRestClient {
    pub fn try_new(config: &schema::Rest) -> Result<Self, ClientSetupError> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientSetupError::CannotBeABase(config.base_url.clone()));
        }

        let mut builder = Client::builder()
            .user_agent(format!("dbms-console/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn request_url(&self, request: &RestRequest) -> Url {
        let mut url = self.base_url.clone();

        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(request.path.segments());
        }

        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }

        url
    }

    /// Turn a non-2xx response into the failure the server described
    async fn failure_from_response(response: Response) -> RemoteOperationFailure {
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return e.into(),
        };

        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(ErrorBody { message }) => RemoteOperationFailure::new(message),
            Err(_) if !body.trim().is_empty() => RemoteOperationFailure::new(body),
            Err(_) => RemoteOperationFailure::new(status_text(status)),
        }
    }
}

fn status_text(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}

#[async_trait]
impl RestClient for HttpRestClient {
    async fn send(&self, request: &RestRequest) -> Result<Value, RemoteOperationFailure> {
        let url = self.request_url(request);
        debug!("Sending {} {}", request.verb, url);

        let response = self
            .client
            .request(request.verb.into(), url)
            .send()
            .await
            .map_err(|e| {
                warn!("Request {} failed: {}", request, e);
                RemoteOperationFailure::from(e)
            })?;

        let status = response.status();
        debug!("Response to {}: {}", request, status);

        if !status.is_success() {
            let failure = Self::failure_from_response(response).await;
            warn!("{} returned {}: {}", request, status, failure);
            return Err(failure);
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&body)?)
    }
}
