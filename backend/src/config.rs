//! Static host settings, read from `PRIMEHOMES_*` environment variables.

use std::path::PathBuf;

use thiserror::Error;

pub const HOST_VAR: &str = "PRIMEHOMES_HOST";
pub const PORT_VAR: &str = "PRIMEHOMES_PORT";
pub const ASSETS_DIR_VAR: &str = "PRIMEHOMES_ASSETS_DIR";
pub const ASSET_BASE_VAR: &str = "PRIMEHOMES_ASSET_BASE";
pub const OPEN_BROWSER_VAR: &str = "PRIMEHOMES_OPEN_BROWSER";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PRIMEHOMES_PORT=`{0}` is not a valid port")]
    InvalidPort(String),

    #[error("PRIMEHOMES_OPEN_BROWSER=`{0}` is not a boolean")]
    InvalidFlag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the listing images and floor plans.
    pub assets_dir: PathBuf,
    /// URL prefix the frontend was built with; images live under `<base>/images`.
    pub asset_base: String,
    /// Open the default browser once the server is up.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            assets_dir: PathBuf::from("public/images"),
            asset_base: "/PrimeHomes".to_string(),
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR) {
            config.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port))?;
        }
        if let Some(dir) = lookup(ASSETS_DIR_VAR) {
            config.assets_dir = PathBuf::from(dir);
        }
        if let Some(base) = lookup(ASSET_BASE_VAR) {
            config.asset_base = normalize_base(&base);
        }
        if let Some(flag) = lookup(OPEN_BROWSER_VAR) {
            config.open_browser = parse_flag(&flag).ok_or(ConfigError::InvalidFlag(flag))?;
        }
        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Mount point of the image directory, e.g. `/PrimeHomes/images`.
    pub fn images_mount(&self) -> String {
        format!("{}/images", self.asset_base)
    }
}

/// Leading slash, no trailing slash; the root base becomes `""`.
fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
