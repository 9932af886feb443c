//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::finder::FinderConfig;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("FUEL_BIND_ADDR is not a socket address: {0}")]
    InvalidBindAddr(String),

    #[error("FUEL_TIMEOUT_SECS is not a positive number of seconds: {0}")]
    InvalidTimeout(String),
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Fuel finder client settings
    pub finder: FinderConfig,

    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// Serve fixture pages from here instead of the live site
    pub mock_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    ///
    /// - `FUEL_FINDER_URL`: results endpoint (defaults to RACQ)
    /// - `FUEL_BIND_ADDR`: listen address (defaults to `127.0.0.1:3000`)
    /// - `FUEL_TIMEOUT_SECS`: request timeout (defaults to none)
    /// - `FUEL_MOCK_DIR`: directory of `{postcode}.html` fixtures
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let mut finder = FinderConfig::new();
        if let Some(url) = var("FUEL_FINDER_URL") {
            finder = finder.with_endpoint(url);
        }
        if let Some(raw) = var("FUEL_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&s| s > 0)
                .ok_or(ConfigError::InvalidTimeout(raw))?;
            finder = finder.with_timeout(secs);
        }

        let raw_addr = var("FUEL_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_addr.clone()))?;

        Ok(Self {
            finder,
            bind_addr,
            mock_dir: var("FUEL_MOCK_DIR").map(PathBuf::from),
        })
    }
}
