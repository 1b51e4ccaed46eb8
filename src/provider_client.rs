use axum::body::Bytes;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use strum_macros::AsRefStr;

use crate::config::ProviderConfig;

/// Subscription status a new subscriber is created with.
#[derive(Debug, Clone, Copy, AsRefStr, Serialize)]
pub enum SubscriberStatus {
    #[strum(serialize = "unconfirmed")]
    #[serde(rename = "unconfirmed")]
    Unconfirmed,
}

/// A client for the mailing-list provider's subscribers API.
/// The inner `reqwest::Client` is built once and reused for every call.
#[derive(Debug)]
pub struct ProviderClient {
    pub http_client: Client,
    pub url: reqwest::Url,
    group_id: Option<String>,
    api_key: Option<SecretString>,
}

impl ProviderClient {
    pub fn new(
        url: reqwest::Url,
        api_key: Option<SecretString>,
        group_id: Option<String>,
        timeout: Option<std::time::Duration>,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(ProviderClient {
            http_client,
            url,
            group_id,
            api_key,
        })
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let url = config
            .base_url()
            .map_err(|e| Error::UrlParsing(e.to_string()))?;

        Self::new(
            url,
            config.api_key.clone(),
            config.group_id.clone(),
            config.timeout(),
        )
    }

    /// Creates the subscriber, or updates it if the email is already known,
    /// and adds it to the configured group as `unconfirmed`.
    ///
    /// On a 2xx the response body is returned as a `Value` (see `payload_from_body`).
    /// Any other status is an `Error::Rejected` carrying the provider's status and raw body.
    #[tracing::instrument(name = "Provider create or update subscriber", skip(self, email))]
    pub async fn create_or_update_subscriber(&self, email: Option<&Value>) -> Result<Value> {
        let api_key = self.api_key.as_ref().ok_or(Error::MissingApiKey)?;
        let group_id = self.group_id.as_deref().ok_or(Error::MissingGroupId)?;

        let url = self
            .url
            .join("api/subscribers")
            .map_err(|e| Error::UrlParsing(e.to_string()))?;

        let params = SubscriberParams {
            email,
            groups: [group_id],
            status: SubscriberStatus::Unconfirmed,
        };

        let resp = self
            .http_client
            .post(url)
            .bearer_auth(api_key.expose_secret())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.bytes().await?;
            tracing::debug!("provider rejected the request with status: {status}");
            return Err(Error::Rejected { status, body });
        }

        let body = resp.bytes().await?;
        Ok(payload_from_body(&body))
    }
}

/// An empty body (a `204`) is `Null`, a body that is not JSON is kept as a string.
fn payload_from_body(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

/// Body of the provider's "create or update subscriber" call.
/// A missing `email` is left out of the body entirely.
#[derive(Debug, Serialize)]
pub struct SubscriberParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a Value>,
    pub groups: [&'a str; 1],
    pub status: SubscriberStatus,
}

// ###################################
// ->   ERROR & RESULT
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("provider rejected the request with status {status}")]
    Rejected { status: StatusCode, body: Bytes },
    #[error("provider api key is not configured")]
    MissingApiKey,
    #[error("provider group id is not configured")]
    MissingGroupId,
    #[error("url parsing error: {0}")]
    UrlParsing(String),

    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
