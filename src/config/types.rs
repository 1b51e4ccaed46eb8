//! The configuration structs used to build the AppConfig, and their impls.
use std::path::Path;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use strum_macros::AsRefStr;

use crate::config::{ConfigError, ConfigResult};

/// Environment variables holding the provider credentials, mapped into `provider_config`.
pub const PROVIDER_ENV_VARS: [&str; 2] = ["MAILERLITE_API_KEY", "MAILERLITE_GROUP_ID"];

// ###################################
// ->   STRUCTS
// ###################################
#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub net_config: NetConfig,
    pub provider_config: ProviderConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NetConfig {
    pub host: [u8; 4],
    pub app_port: u16,
}

/// Everything needed to reach the mailing-list provider.
///
/// `api_key` and `group_id` are optional on purpose: their absence is reported
/// by the provider client when a subscribe call is attempted.
#[derive(Deserialize, Clone, Debug)]
pub struct ProviderConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<SecretString>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub group_id: Option<String>,
    #[serde(default)]
    pub timeout_millis: Option<u64>,
}

// ###################################
// ->   IMPLs
// ###################################
impl ProviderConfig {
    pub fn base_url(&self) -> ConfigResult<reqwest::Url> {
        reqwest::Url::parse(&self.base_url)
            .map_err(|er| ConfigError::InvalidProviderUrl(er.to_string()))
    }

    /// `None` leaves the transport's own default in place.
    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout_millis.map(std::time::Duration::from_millis)
    }
}

impl AppConfig {
    /// Layers, in order of increasing priority:
    /// `base.toml`, `{environment}.toml`, `APP_*` env vars and the provider credentials.
    pub fn figment(config_dir: &Path, environment: Environment) -> Figment {
        let environment_filename = format!("{}.toml", environment.as_ref().to_lowercase());

        Figment::new()
            .merge(Toml::file(config_dir.join("base.toml")))
            .merge(Toml::file(config_dir.join(environment_filename)))
            .merge(Env::prefixed("APP_").split("__"))
            .merge(Env::raw().only(&PROVIDER_ENV_VARS).map(|key| {
                key.as_str()
                    .to_ascii_lowercase()
                    .replacen("mailerlite_", "provider_config.", 1)
                    .into()
            }))
    }

    pub fn load(config_dir: &Path, environment: Environment) -> ConfigResult<Self> {
        let config = Self::figment(config_dir, environment).extract()?;
        Ok(config)
    }
}

// ###################################
// ->   TRY FROMs
// ###################################

impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(Self::Error::StringToEnvironmentFail(value)),
        }
    }
}

// ###################################
// ->   DESERIALIZERS
// ###################################

/// Group ids are numeric, so env values arrive as numbers while toml values may be strings.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Unsigned(u64),
        Signed(i64),
    }

    let value: Option<StringOrNumber> = Deserialize::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        StringOrNumber::String(s) => s,
        StringOrNumber::Unsigned(n) => n.to_string(),
        StringOrNumber::Signed(n) => n.to_string(),
    }))
}

// ###################################
// ->   TESTS
// ###################################
