//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;
pub mod output;
pub mod process;

use std::path::Path;

use invex_core::InvexConfig;

/// Load the pipeline config from `--config`, falling back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<InvexConfig> {
    match config_path {
        Some(path) => Ok(InvexConfig::from_file(Path::new(path))?),
        None => Ok(InvexConfig::default()),
    }
}
