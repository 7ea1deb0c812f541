use std::time::Duration;

use url::Url;

use crate::error::ConfigError;
use crate::secrets::SecretManager;

/// Settings for the upstream Zing MP3 web API.
#[derive(Clone, Debug)]
pub struct ZingConfig {
    pub base_url: Url,
    pub version: String,
    pub secret_key: String,
    pub api_key: String,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub upstream_timeout: Duration,
    pub zing: ZingConfig,
}

impl ServerConfig {
    pub fn from_secrets(secrets: &SecretManager) -> Result<Self, ConfigError> {
        let port = secrets
            .get("PORT")
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid {
                key: "PORT",
                message: e.to_string(),
            })?;

        let timeout_ms = secrets
            .get("UPSTREAM_TIMEOUT_MS")
            .parse::<u64>()
            .map_err(|e| ConfigError::Invalid {
                key: "UPSTREAM_TIMEOUT_MS",
                message: e.to_string(),
            })?;
        if timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                key: "UPSTREAM_TIMEOUT_MS",
                message: "must be greater than zero".to_string(),
            });
        }

        let base_url = Url::parse(&secrets.get("ZING_URL")).map_err(|e| ConfigError::Invalid {
            key: "ZING_URL",
            message: e.to_string(),
        })?;

        let host = match secrets.get("HOST") {
            h if h.is_empty() => "0.0.0.0".to_string(),
            h => h,
        };

        Ok(ServerConfig {
            host,
            port,
            upstream_timeout: Duration::from_millis(timeout_ms),
            zing: ZingConfig {
                base_url,
                version: secrets.get("ZING_VERSION"),
                secret_key: secrets.get("ZING_SECRET_KEY"),
                api_key: secrets.get("ZING_API_KEY"),
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
