use std::time::Duration;

use url::Url;

pub const ENV_BASE_URL: &str = "R2I_BASE_URL";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "R2I_CONNECT_TIMEOUT_SECS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "R2I_REQUEST_TIMEOUT_SECS";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Where the backend lives and how long the transport waits for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl TransportSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Reads overrides from the process environment. Unset variables keep
    /// their defaults.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            settings.base_url = base_url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_CONNECT_TIMEOUT_SECS) {
            settings.connect_timeout = parse_secs(ENV_CONNECT_TIMEOUT_SECS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            settings.request_timeout = parse_secs(ENV_REQUEST_TIMEOUT_SECS, &raw)?;
        }
        settings.base()?;
        Ok(settings)
    }

    /// Base URL with a trailing slash, so relative endpoint paths join below it.
    pub fn base(&self) -> Result<Url, SettingsError> {
        let mut raw = self.base_url.clone();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw).map_err(|err| SettingsError::InvalidValue {
            key: ENV_BASE_URL.to_string(),
            message: err.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(SettingsError::InvalidValue {
                key: ENV_BASE_URL.to_string(),
                message: "url cannot be a base".to_string(),
            });
        }
        Ok(url)
    }
}

fn parse_secs(key: &str, raw: &str) -> Result<Duration, SettingsError> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|err| SettingsError::InvalidValue {
            key: key.to_string(),
            message: err.to_string(),
        })?;
    if secs == 0 {
        return Err(SettingsError::InvalidValue {
            key: key.to_string(),
            message: "timeout must be positive".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}
