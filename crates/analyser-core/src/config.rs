//! Server and CORS configuration.
//!
//! The original deployment configured its application object once at process
//! start; here that state is an explicit value constructed at startup and
//! passed to the server-start routine. CORS is part of the same structure so
//! a production deployment can tighten it without code changes.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::AnalyserResult;

/// Wildcard entry recognized in CORS lists.
pub const WILDCARD: &str = "*";

/// Cross-origin policy applied to every route.
///
/// Defaults to the permissive development policy: any origin, any method,
/// any header, credentials allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub allow_credentials: bool,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: vec![WILDCARD.to_string()],
            allow_credentials: true,
            allow_methods: vec![WILDCARD.to_string()],
            allow_headers: vec![WILDCARD.to_string()],
        }
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allow_origins.iter().any(|o| o == WILDCARD)
    }

    pub fn allows_any_method(&self) -> bool {
        self.allow_methods.iter().any(|m| m == WILDCARD)
    }

    pub fn allows_any_header(&self) -> bool {
        self.allow_headers.iter().any(|h| h == WILDCARD)
    }
}

/// Top-level server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults, so a file can set only the
    /// values it wants to override.
    pub fn from_file(path: &Path) -> AnalyserResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}
