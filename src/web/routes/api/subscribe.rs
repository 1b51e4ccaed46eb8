use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{field, info, Span};

use crate::{
    provider_client,
    web::{
        types::{SubscribeRequest, SubscribeResponse},
        WebResult,
    },
    AppState,
};

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum SubscribeError {
    #[error("request body could not be read as json: {0}")]
    InvalidBody(String),

    #[error("provider client error: {0}")]
    Provider(#[from] provider_client::Error),
}

// ###################################
// ->   API
// ###################################
/// Forwards the received email to the mailing-list provider.
///
/// The email is not validated here. A structured provider rejection is relayed
/// to the client as is, every other failure becomes a generic 500.
#[tracing::instrument(
    name = "Forwarding subscriber to the provider",
    skip(app_state, payload),
    fields(subscriber_email = field::Empty)
)]
pub async fn subscribe(
    State(app_state): State<AppState>,
    payload: Result<Json<SubscribeRequest>, JsonRejection>,
) -> WebResult<Json<SubscribeResponse>> {
    let Json(request) = payload.map_err(|rej| SubscribeError::InvalidBody(rej.body_text()))?;
    if let Some(email) = &request.email {
        Span::current().record("subscriber_email", field::display(email));
    }

    let data = app_state
        .provider_client
        .create_or_update_subscriber(request.email.as_ref())
        .await
        .map_err(SubscribeError::Provider)?;

    info!("SUCCESS");
    Ok(Json(SubscribeResponse::subscribed(data)))
}
