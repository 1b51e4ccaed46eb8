use std::sync::Arc;

use axum::{
    http::{HeaderMap, Method, Uri},
    response::Response,
};
use uuid::Uuid;

use crate::web::{log, Error, REQUEST_ID_HEADER};

/// Turns a web `Error` stashed in the response extensions into the response the client gets,
/// and writes one log line per request.
pub async fn response_mapper(
    req_method: Method,
    uri: Uri,
    headers: HeaderMap,
    resp: Response,
) -> Response {
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|id| id.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let web_error = resp.extensions().get::<Arc<Error>>().map(Arc::as_ref);
    let client_error = web_error.map(Error::client_error);

    if let Some(er) = web_error {
        tracing::error!("SERVER ERROR: {er} ID: {request_id}");
    }

    // The error response replaces the one the request id was propagated onto.
    let err_resp = client_error.as_ref().map(|ce| {
        let mut err_resp = ce.to_response();
        if let Some(id) = headers.get(REQUEST_ID_HEADER) {
            err_resp.headers_mut().insert(REQUEST_ID_HEADER, id.clone());
        }
        err_resp
    });

    if let Err(er) = log::log_request(
        request_id,
        req_method,
        uri,
        resp.status(),
        web_error,
        client_error.as_ref(),
    )
    .await
    {
        tracing::warn!("failed to write the request log line: {er}");
    }

    err_resp.unwrap_or(resp)
}
