//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub port: u16,
    /// Delay fixture responses the way a remote backend would.
    pub simulate_latency: bool,
    /// Overrides the Leptos `site-root` for static assets.
    pub site_root: Option<PathBuf>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, simulate_latency: true, site_root: None }
    }
}

impl PortalConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `FEEPORTAL_SIMULATE_LATENCY`: `true` (default) or `false`
    /// - `FEEPORTAL_SITE_ROOT`: static asset directory
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };
        let simulate_latency = match std::env::var("FEEPORTAL_SIMULATE_LATENCY") {
            Ok(raw) => parse_bool("FEEPORTAL_SIMULATE_LATENCY", &raw)?,
            Err(_) => true,
        };
        let site_root = std::env::var("FEEPORTAL_SITE_ROOT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self { port, simulate_latency, site_root })
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw.to_owned() })
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value: raw.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
