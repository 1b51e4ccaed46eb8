use std::future::Future;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use super::state::{ResultStatus, SubscriptionResult};

/// Path of the subscribe endpoint, relative to the site's base url.
pub const SUBSCRIBE_PATH: &str = "/api/subscribe";

/// The client-to-server subscribe call.
///
/// Resolves for every HTTP response, including non-2xx ones. Only a failure to
/// reach the server or to read its body as JSON is an `Err`.
pub trait SubscribeApi {
    fn subscribe(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<SubscriptionResult, TransportError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpSubscribeApi {
    http_client: Client,
    url: reqwest::Url,
}

impl HttpSubscribeApi {
    pub fn new<S: AsRef<str>>(base_url: S) -> Result<Self, TransportError> {
        let url = reqwest::Url::parse(base_url.as_ref())
            .and_then(|base| base.join(SUBSCRIBE_PATH))
            .map_err(|e| TransportError::UrlParsing(e.to_string()))?;

        Ok(Self {
            http_client: Client::new(),
            url,
        })
    }

    pub fn url(&self) -> &reqwest::Url {
        &self.url
    }
}

#[derive(Serialize)]
struct SubscribeBody<'a> {
    email: &'a str,
}

impl SubscribeApi for HttpSubscribeApi {
    #[tracing::instrument(name = "Sending subscribe request", skip(self))]
    async fn subscribe(&self, email: &str) -> Result<SubscriptionResult, TransportError> {
        let resp = self
            .http_client
            .post(self.url.clone())
            .json(&SubscribeBody { email })
            .send()
            .await?;

        let status = ResultStatus::from_http_success(resp.status().is_success());
        let body = resp.bytes().await?;
        let body: Value = serde_json::from_slice(&body)?;

        // Relayed provider errors don't have to carry a message.
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Ok(SubscriptionResult { message, status })
    }
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid subscribe url: {0}")]
    UrlParsing(String),
    #[error("subscribe request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("subscribe response is not valid json: {0}")]
    Body(#[from] serde_json::Error),
}
