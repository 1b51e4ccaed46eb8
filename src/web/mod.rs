mod error;
pub mod log;
pub mod midware;
pub mod routes;
mod serve;
pub mod types;

pub use error::{ClientError, Error, WebResult};
pub use serve::serve;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
/// Returned to the client for every failure it is not allowed to see the details of.
pub const GENERIC_ERROR_MSG: &str = "An error occurred. Please try again.";
pub const SUBSCRIBED_MSG: &str = "You have been subscribed! Confirm email in your inbox.";
