use crate::{client, config, provider_client, web};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("web error: {0}")]
    Web(#[from] web::Error),
    #[error("provider client error: {0}")]
    ProviderClient(#[from] provider_client::Error),
    #[error("client transport error: {0}")]
    Transport(#[from] client::TransportError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
