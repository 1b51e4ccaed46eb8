//! Request and response bodies of the `web` module.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::SUBSCRIBED_MSG;

// ###################################
// ->   STRUCTS
// ###################################
/// Deserializable subscribe request.
/// The `email` is kept as raw JSON and is **not** validated. Any JSON value is
/// handed to the provider as received, an absent or `null` email is left out.
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub email: Option<Value>,
}

/// Body of a successful subscribe response.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SubscribeResponse {
    pub message: String,
    pub data: Value,
}

impl SubscribeResponse {
    pub fn subscribed(data: Value) -> Self {
        Self {
            message: SUBSCRIBED_MSG.to_string(),
            data,
        }
    }
}
