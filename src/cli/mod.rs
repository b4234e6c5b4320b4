pub mod build;
pub mod init;
pub mod series;
pub mod verify;

use crate::{Collection, Config};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pebble-series")]
#[command(version)]
#[command(about = "Series, pagination and prev/next navigation for a static blog", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = init::DEFAULT_CONFIG_FILE, env = "PEBBLE_SERIES_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
        #[arg(long)]
        name: Option<String>,
    },
    /// List series, or one page of a series' articles
    Series {
        #[arg(long)]
        slug: Option<String>,
        #[arg(short, long, default_value = "1")]
        page: usize,
    },
    /// Check series grouping, ordering and slug uniqueness
    Verify,
    /// Write navigation data and the RSS feed
    Build {
        #[arg(short, long, default_value = "./dist")]
        output: PathBuf,
        #[arg(long)]
        base_url: Option<String>,
    },
}

/// Loads the config and the article collection it points at.
pub fn load_site(config_path: &Path) -> Result<(Config, Collection)> {
    let config = Config::load(config_path)?;
    let content_dir = config.content_dir(config_path);
    let collection = Collection::load(&content_dir, &config.load_options())?;
    Ok((config, collection))
}
