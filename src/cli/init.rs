use crate::Config;
use anyhow::{bail, Result};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "pebble-series.toml";

pub fn run(path: &Path, name: Option<String>) -> Result<()> {
    let config_path = path.join(DEFAULT_CONFIG_FILE);
    if config_path.exists() {
        bail!("{} already exists", config_path.display());
    }

    let mut config = Config::default();
    if let Some(name) = name {
        config.site.title = name;
    }

    std::fs::create_dir_all(path.join(&config.content.dir))?;
    std::fs::write(&config_path, toml::to_string_pretty(&config)?)?;

    tracing::info!("Created {}", config_path.display());
    tracing::info!(
        "Put markdown articles under {} and run 'pebble-series verify'",
        path.join(&config.content.dir).display()
    );

    Ok(())
}
