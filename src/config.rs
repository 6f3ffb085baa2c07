use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_DATA_PATH: &str = "superstore.csv";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8050";

pub const DATA_PATH_VAR: &str = "SUPERSTORE_DATA";
pub const BIND_ADDR_VAR: &str = "SUPERSTORE_ADDR";

/// Startup settings for the dashboard binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Sales file read once at startup.
    pub data_path: PathBuf,
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
}

impl DashboardConfig {
    /// Resolve settings from the process environment, falling back to the
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_path = lookup(DATA_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());
        let addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr.clone(),
                source,
            })?;

        Ok(Self {
            data_path: PathBuf::from(data_path),
            bind_addr,
        })
    }
}
