use crate::content::LoadOptions;
use crate::models::PaginationConfig;
use crate::services::slug::SlugOptions;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub slug: SlugOptions,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            url: "http://localhost:4321".to_string(),
            language: default_language(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    #[serde(default = "default_content_dir")]
    pub dir: String,
    #[serde(default)]
    pub include_disabled: bool,
    /// Articles whose slug contains this text stay out of the feed.
    #[serde(default = "default_exclude_slug_pattern")]
    pub exclude_slug_pattern: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
            include_disabled: false,
            exclude_slug_pattern: default_exclude_slug_pattern(),
        }
    }
}

fn default_language() -> String {
    "zh-TW".to_string()
}

fn default_content_dir() -> String {
    "src/content/blogs".to_string()
}

fn default_exclude_slug_pattern() -> String {
    "not-deployed".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Could not read config file '{}': {}. Run `pebble-series init` to create one.",
                path.display(),
                e
            )
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pagination.items_per_page == 0 {
            anyhow::bail!("pagination.items_per_page must be greater than 0");
        }
        if self.pagination.items_per_page > 100 {
            anyhow::bail!("pagination.items_per_page must be 100 or less");
        }
        if self.pagination.pre_generate_pages == 0 {
            anyhow::bail!("pagination.pre_generate_pages must be at least 1");
        }
        if self.pagination.max_pages == Some(0) {
            anyhow::bail!("pagination.max_pages must be at least 1 when set");
        }
        if self.slug.separator.is_empty() {
            anyhow::bail!("slug.separator must not be empty");
        }
        if self.site.url.trim().is_empty() {
            anyhow::bail!("site.url must not be empty");
        }
        Ok(())
    }

    /// Content directory, resolved against the directory holding the config.
    pub fn content_dir(&self, config_path: &Path) -> std::path::PathBuf {
        let dir = Path::new(&self.content.dir);
        if dir.is_absolute() {
            return dir.to_path_buf();
        }
        match config_path.parent() {
            Some(parent) => parent.join(dir),
            None => dir.to_path_buf(),
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            include_disabled: self.content.include_disabled,
            slug: self.slug.clone(),
        }
    }
}
