//! Command implementations

pub mod check;
pub mod completions;
pub mod update;
pub mod version;

use anyhow::Result;
use camino::Utf8Path;
use skyhook_core::config::DEFAULT_CONFIG_FILE;
use skyhook_core::UpdateConfig;

/// Resolve the configuration: an explicit `--config` path, or
/// `skyhook.yaml` in the working directory
pub(crate) fn load_config(path: Option<&Utf8Path>) -> Result<UpdateConfig> {
    let path = path.unwrap_or_else(|| Utf8Path::new(DEFAULT_CONFIG_FILE));
    Ok(UpdateConfig::load(path)?)
}
