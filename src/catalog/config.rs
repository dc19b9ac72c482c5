use crate::error::{CatalogError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Environment variable that overrides the configured API base URL.
pub const API_URL_ENV: &str = "CATALOG_API_URL";

/// Configuration for catalog, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Root URL of the product API (e.g. "https://fakestoreapi.com")
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: CatalogConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Apply overrides in precedence order: environment, then explicit flag.
    pub fn with_overrides(mut self, env_url: Option<String>, flag_url: Option<String>) -> Self {
        if let Some(url) = flag_url.or(env_url).filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        self
    }

    /// Base URL without trailing slashes. Errors if nothing usable is left.
    pub fn base_url(&self) -> Result<&str> {
        let url = self.base_url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(CatalogError::Config("API base URL is empty".into()));
        }
        Ok(url)
    }
}
