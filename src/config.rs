//! Configuration types.

use std::str::FromStr;

use crate::error::ConfigError;

/// What the HTTP layer does with a message that is blank after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyMessagePolicy {
    /// Answer 400 without running the analyzer.
    #[default]
    Reject,
    /// Hand the message to the analyzer, which substitutes its placeholder.
    Placeholder,
}

impl FromStr for EmptyMessagePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "placeholder" => Ok(Self::Placeholder),
            other => Err(ConfigError::InvalidValue {
                key: "HONEYPOT_EMPTY_MESSAGE".into(),
                message: format!("expected 'reject' or 'placeholder', got '{}'", other),
            }),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
    /// Handling of blank messages on `POST /analyze`.
    pub empty_message_policy: EmptyMessagePolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            empty_message_policy: EmptyMessagePolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `HONEYPOT_*` environment variables.
    ///
    /// Unset variables fall back to [`ServerConfig::default`]; set but
    /// unparsable ones are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HONEYPOT_HOST")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("HONEYPOT_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "HONEYPOT_PORT".into(),
                    message: format!("'{}': {}", raw, e),
                })?,
            None => defaults.port,
        };

        let empty_message_policy = match lookup("HONEYPOT_EMPTY_MESSAGE") {
            Some(raw) => raw.parse()?,
            None => defaults.empty_message_policy,
        };

        Ok(Self {
            host,
            port,
            empty_message_policy,
        })
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
