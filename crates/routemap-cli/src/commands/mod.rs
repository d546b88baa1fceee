pub mod dispatch;
pub mod hash;
pub mod parse;
pub mod rules;

use std::path::Path;

use anyhow::{bail, Context, Result};
use routemap::{Args, RouteMap, RouteMapConfig};

/// Loads the rule table and builds a router from it
pub fn load_router(config: &Path) -> Result<RouteMap> {
    let config = RouteMapConfig::load(config)?;
    RouteMap::from_config(&config).context("Invalid rule in config")
}

/// Parses `key=value` arguments into parameter bindings
pub fn parse_params(params: &[String]) -> Result<Args> {
    let mut args = Args::new();
    for param in params {
        let Some((key, value)) = param.split_once('=') else {
            bail!("Expected key=value, got `{}`", param);
        };
        if key.is_empty() {
            bail!("Empty parameter name in `{}`", param);
        }
        args.insert(key.to_string(), value.to_string());
    }
    Ok(args)
}
