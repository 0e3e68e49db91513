//! Connection settings for the wallet daemon

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Http,
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            other => Err(Error::Validation(format!(
                "Invalid protocol '{}'. Must be one of: http, https",
                other
            ))),
        }
    }
}

/// Where the wallet RPC server listens.
///
/// Defaults match a local `monero-wallet-rpc` started with
/// `--rpc-bind-port 18082`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WalletConfig {
    pub protocol: Protocol,
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl WalletConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::Validation("Host cannot be empty".to_string()));
        }

        if self.port == 0 {
            return Err(Error::Validation(
                "Port must be greater than 0".to_string(),
            ));
        }

        if !self.path.starts_with('/') {
            return Err(Error::Validation(format!(
                "Path '{}' must start with '/'",
                self.path
            )));
        }

        Ok(())
    }

    /// Endpoint that every request is POSTed to
    pub fn url(&self) -> String {
        format!(
            "{}://{}:{}{}",
            self.protocol, self.host, self.port, self.path
        )
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            protocol: Protocol::Http,
            host: "127.0.0.1".to_string(),
            port: 18082,
            path: "/json_rpc".to_string(),
        }
    }
}
