use std::{fmt, time::Duration};

use reqwest::Client;

use crate::error::{Result, SunbrellaError};

/// Environment variable holding the openweathermap API key.
pub const API_KEY_ENV: &str = "API_KEY";

pub const DEFAULT_GEOIP_URL: &str = "https://ifconfig.co/json";
pub const DEFAULT_ONECALL_URL: &str = "https://api.openweathermap.org/data/2.5/onecall";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Runtime configuration, built once at startup and handed to the lookups.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub geoip_url: String,
    pub onecall_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Read the API key from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_api_key(std::env::var(API_KEY_ENV).ok())
    }

    /// Build a config from an optional key; a missing or blank key is a
    /// configuration error.
    pub fn from_api_key(api_key: Option<String>) -> Result<Self> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(SunbrellaError::Configuration)?;

        Ok(Self {
            api_key,
            geoip_url: DEFAULT_GEOIP_URL.to_string(),
            onecall_url: DEFAULT_ONECALL_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_geoip_url(mut self, url: impl Into<String>) -> Self {
        self.geoip_url = url.into();
        self
    }

    pub fn with_onecall_url(mut self, url: impl Into<String>) -> Self {
        self.onecall_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// HTTP client shared by both lookups, bounded by the configured timeout.
    pub fn http_client(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("sunbrella/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SunbrellaError::HttpClient)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("geoip_url", &self.geoip_url)
            .field("onecall_url", &self.onecall_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
