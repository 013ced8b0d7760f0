//! Configuration loading.

use std::path::Path;

use anyhow::Context;
use cascade_core::config::CascadeConfig;

/// Load engine configuration from a TOML file. Missing sections and fields
/// fall back to their defaults.
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<CascadeConfig> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config: CascadeConfig =
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))?;
    Ok(config)
}
