use axum::{
    body::Bytes,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use strum_macros::AsRefStr;

use super::routes::SubscribeError;
use crate::provider_client;

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("subscribe error: {0}")]
    Subscribe(#[from] SubscribeError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Maps a server error to whatever the client is allowed to see.
    /// A structured provider rejection is the only error that reaches the client unchanged.
    pub fn client_error(&self) -> ClientError {
        match self {
            Error::Subscribe(SubscribeError::Provider(provider_client::Error::Rejected {
                status,
                body,
            })) => ClientError::ProviderRejected {
                status: *status,
                body: body.clone(),
            },
            _ => ClientError::ServiceError,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

#[derive(Debug, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("{}", super::GENERIC_ERROR_MSG)]
    ServiceError,
    #[display("Provider rejected the request with status: {status}")]
    ProviderRejected { status: StatusCode, body: Bytes },
}

impl ClientError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ClientError::ServiceError => StatusCode::INTERNAL_SERVER_ERROR,
            ClientError::ProviderRejected { status, .. } => *status,
        }
    }

    /// Builds the body the client receives for this error.
    pub fn to_response(&self) -> Response {
        match self {
            ClientError::ServiceError => (
                self.status_code(),
                Json(json!({ "message": self.to_string() })),
            )
                .into_response(),
            ClientError::ProviderRejected { status, body } => (
                *status,
                [(header::CONTENT_TYPE, "application/json")],
                body.clone(),
            )
                .into_response(),
        }
    }
}
