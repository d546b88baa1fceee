// File: src/config.rs
// Purpose: Rule table and router settings from routemap.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::RuleDef;

/// Router configuration
///
/// ```toml
/// [routing]
/// prefix = "#"
///
/// [[rules]]
/// route = "/users/:id"
/// method = "user"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RouteMapConfig {
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Rules in match-priority order
    #[serde(default)]
    pub rules: Vec<RuleDef>,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// String prepended to paths written to, and stripped from paths read
    /// from, the location (default: "")
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Initial location path for the in-memory location (default: "/")
    #[serde(default = "default_start")]
    pub start: String,
}

fn default_prefix() -> String {
    String::new()
}

fn default_start() -> String {
    "/".to_string()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            start: default_start(),
        }
    }
}

impl RouteMapConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./routemap.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("routemap.toml")
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: RouteMapConfig = toml::from_str(content)?;
        Ok(config)
    }
}
