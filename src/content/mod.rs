//! The article collection and the markdown loader that fills it.

use crate::models::{Article, ArticleFrontmatter, MAX_SERIES_NAME_LENGTH};
use crate::services::slug::{generate_slug, SlugOptions};
use anyhow::{bail, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub include_disabled: bool,
    pub slug: SlugOptions,
}

/// Read-only set of articles for one build.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    articles: Vec<Article>,
    slug_options: SlugOptions,
}

impl Collection {
    pub fn from_articles(articles: Vec<Article>) -> Self {
        Self {
            articles,
            slug_options: SlugOptions::default(),
        }
    }

    pub fn with_slug_options(mut self, slug_options: SlugOptions) -> Self {
        self.slug_options = slug_options;
        self
    }

    /// Loads every `.md`/`.mdx` file under `dir`. Files that cannot be read or
    /// lack a title or datetime are skipped with a warning.
    pub fn load(dir: &Path, options: &LoadOptions) -> Result<Self> {
        if !dir.is_dir() {
            bail!("Content directory not found: {}", dir.display());
        }

        let mut articles = Vec::new();
        let mut skipped = 0;
        let mut disabled = 0;

        let entries = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && is_markdown(e.path()));

        for entry in entries {
            let path = entry.path();
            match load_article(dir, path) {
                Ok(article) if !article.is_enabled && !options.include_disabled => {
                    tracing::debug!("Skipping disabled article: {}", article.slug);
                    disabled += 1;
                }
                Ok(article) => articles.push(article),
                Err(e) => {
                    tracing::warn!("Failed to load {}: {}", path.display(), e);
                    skipped += 1;
                }
            }
        }

        tracing::info!(
            "Loaded {} articles from {} ({} skipped, {} disabled)",
            articles.len(),
            dir.display(),
            skipped,
            disabled
        );

        Ok(Self {
            articles,
            slug_options: options.slug.clone(),
        })
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn slug_options(&self) -> &SlugOptions {
        &self.slug_options
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("md") || e.eq_ignore_ascii_case("mdx"))
        .unwrap_or(false)
}

fn load_article(root: &Path, path: &Path) -> Result<Article> {
    let file_content = fs::read_to_string(path)?;
    let relative = path.strip_prefix(root)?;

    let id = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");
    let slug = path_slug(relative);
    if slug.is_empty() {
        bail!("cannot derive a slug from the file path");
    }

    let frontmatter = parse_frontmatter(&file_content)?;
    let article = frontmatter.into_article(&id, &slug);
    if let Some(name) = &article.series_name {
        if name.chars().count() > MAX_SERIES_NAME_LENGTH {
            tracing::warn!(
                "Series name on {} is longer than {} characters",
                article.id,
                MAX_SERIES_NAME_LENGTH
            );
        }
    }
    Ok(article)
}

/// `2024/My First Post.md` becomes `2024/my-first-post`.
fn path_slug(relative: &Path) -> String {
    let stem_path = relative.with_extension("");
    stem_path
        .components()
        .map(|c| generate_slug(&c.as_os_str().to_string_lossy()))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Reads the `---` fenced `key: value` block at the top of a blog file.
pub fn parse_frontmatter(content: &str) -> Result<ArticleFrontmatter> {
    let content = content.trim_start_matches('\u{feff}').trim_start();

    let Some(after_first) = content.strip_prefix("---") else {
        bail!("missing frontmatter");
    };
    let Some(end_pos) = after_first.find("\n---") else {
        bail!("unterminated frontmatter");
    };
    let yaml_content = &after_first[..end_pos];

    let mut map = serde_json::Map::new();
    for line in yaml_content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = unquote(value.trim());
        if key.is_empty() {
            continue;
        }

        let value = match key {
            "seriesIndex" => match value.parse::<u32>() {
                Ok(index) => serde_json::Value::from(index),
                Err(_) => {
                    tracing::warn!("Ignoring seriesIndex '{}': not a non-negative integer", value);
                    continue;
                }
            },
            "isEnabled" => match value {
                "true" => serde_json::Value::Bool(true),
                "false" => serde_json::Value::Bool(false),
                _ => {
                    tracing::warn!("Ignoring isEnabled '{}': expected true or false", value);
                    continue;
                }
            },
            _ => serde_json::Value::String(value.to_string()),
        };
        map.insert(key.to_string(), value);
    }

    Ok(serde_json::from_value(serde_json::Value::Object(map))?)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
