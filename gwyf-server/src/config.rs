//! Process configuration, assembled once at startup.

use std::net::SocketAddr;

use crate::ratp::DEFAULT_BASE_URL;

/// Default listen address.
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Environment variable overriding the listen address.
pub const LISTEN_ADDR_VAR: &str = "GWYF_LISTEN_ADDR";

/// Environment variable overriding the upstream base URL.
pub const UPSTREAM_URL_VAR: &str = "GWYF_UPSTREAM_URL";

/// Errors in startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid listen address '{value}': {source}")]
    InvalidListenAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Configuration for the proxy server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Address the HTTP server binds to
    pub listen_addr: SocketAddr,
    /// Base URL of the RATP WAP service
    pub upstream_base_url: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            upstream_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ProxyConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen = lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidListenAddr {
                value: listen.clone(),
                source,
            })?;

        let upstream_base_url =
            lookup(UPSTREAM_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            listen_addr,
            upstream_base_url,
        })
    }

    /// Set a custom upstream base URL (for testing).
    pub fn with_upstream_base_url(mut self, url: impl Into<String>) -> Self {
        self.upstream_base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_overrides() {
        let config = ProxyConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ProxyConfig::default());
        assert_eq!(config.upstream_base_url, "http://wap.ratp.fr");
        assert_eq!(config.listen_addr.port(), 8080);
    }

    #[test]
    fn overrides_applied() {
        let config = ProxyConfig::from_lookup(|key| match key {
            LISTEN_ADDR_VAR => Some("0.0.0.0:9000".into()),
            UPSTREAM_URL_VAR => Some("http://localhost:1234".into()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.listen_addr, SocketAddr::from(([0, 0, 0, 0], 9000)));
        assert_eq!(config.upstream_base_url, "http://localhost:1234");
    }

    #[test]
    fn invalid_listen_addr_rejected() {
        let err = ProxyConfig::from_lookup(|key| {
            (key == LISTEN_ADDR_VAR).then(|| "not-an-address".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains("not-an-address"));
    }

    #[test]
    fn with_upstream_base_url() {
        let config = ProxyConfig::default().with_upstream_base_url("http://127.0.0.1:3000");
        assert_eq!(config.upstream_base_url, "http://127.0.0.1:3000");
    }
}
