//! Server configuration from the environment.

use std::net::SocketAddr;

use crate::link::{FormVariant, InvalidVariant, LinkConfig};
use crate::rows::RowConfig;

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Default static assets directory, relative to the working directory.
const DEFAULT_STATIC_DIR: &str = "static";

pub const ENV_ADDR: &str = "JOURNEY_LINK_ADDR";
pub const ENV_HOST: &str = "JOURNEY_LINK_HOST";
pub const ENV_VARIANT: &str = "JOURNEY_LINK_VARIANT";
pub const ENV_STATIC_DIR: &str = "JOURNEY_LINK_STATIC_DIR";

/// Errors from reading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: invalid listen address {value:?}: {source}")]
    Addr {
        var: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("{var}: {source}")]
    Variant {
        var: &'static str,
        source: InvalidVariant,
    },

    #[error("{var}: must not be empty")]
    Empty { var: &'static str },
}

/// Everything the server needs at start-up.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub static_dir: String,
    pub link: LinkConfig,
    pub rows: RowConfig,
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_value = lookup(ENV_ADDR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr_value.parse().map_err(|source| ConfigError::Addr {
            var: ENV_ADDR,
            value: addr_value.clone(),
            source,
        })?;

        let mut link = LinkConfig::default();
        if let Some(host) = lookup(ENV_HOST) {
            if host.trim().is_empty() {
                return Err(ConfigError::Empty { var: ENV_HOST });
            }
            link = link.with_host(host.trim());
        }
        if let Some(variant) = lookup(ENV_VARIANT) {
            let variant: FormVariant = variant.parse().map_err(|source| ConfigError::Variant {
                var: ENV_VARIANT,
                source,
            })?;
            link = link.with_variant(variant);
        }

        let static_dir = lookup(ENV_STATIC_DIR).unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        Ok(Self {
            addr,
            static_dir,
            link,
            rows: RowConfig::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.link, LinkConfig::default());
        assert_eq!(config.rows.min_rows, 2);
    }

    #[test]
    fn overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (ENV_ADDR, "0.0.0.0:8080"),
            (ENV_HOST, " www.example.ch "),
            (ENV_VARIANT, "minimal"),
            (ENV_STATIC_DIR, "/srv/static"),
        ]))
        .unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.link.host, "www.example.ch");
        assert_eq!(config.link.variant, FormVariant::Minimal);
        assert_eq!(config.static_dir, "/srv/static");
    }

    #[test]
    fn invalid_addr() {
        let err = ServerConfig::from_lookup(lookup(&[(ENV_ADDR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::Addr { .. }));
        assert!(err.to_string().starts_with("JOURNEY_LINK_ADDR: invalid listen address"));
    }

    #[test]
    fn invalid_variant() {
        let err = ServerConfig::from_lookup(lookup(&[(ENV_VARIANT, "basic")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "JOURNEY_LINK_VARIANT: unknown form variant: basic (expected \"minimal\" or \"advanced\")"
        );
    }

    #[test]
    fn empty_host() {
        let err = ServerConfig::from_lookup(lookup(&[(ENV_HOST, "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Empty { var: ENV_HOST }));
    }
}
