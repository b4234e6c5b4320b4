use crate::models::Article;
use crate::services::adjacency::{get_adjacent_posts, get_adjacent_series_posts};
use crate::services::feed::{feed_articles, generate_rss};
use crate::services::pages::{build_series_overview, build_series_page};
use crate::services::series::{find_slug_collisions, generate_series_list};
use crate::services::slug::validate_series_slug;
use crate::{Collection, Config};
use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

pub fn run(config_path: &Path, output_dir: &Path, base_url: Option<String>) -> Result<()> {
    let (config, collection) = super::load_site(config_path)?;
    let site_url = base_url.unwrap_or_else(|| config.site.url.clone());

    build_site(&config, &collection, output_dir, &site_url)
}

/// Writes every navigation artifact for `collection` under `output_dir`.
pub fn build_site(
    config: &Config,
    collection: &Collection,
    output_dir: &Path,
    site_url: &str,
) -> Result<()> {
    let collisions = find_slug_collisions(&generate_series_list(collection));
    if !collisions.is_empty() {
        let detail: Vec<String> = collisions
            .iter()
            .map(|c| format!("'{}' ({})", c.slug, c.names.join(", ")))
            .collect();
        bail!("Series slug collision: {}", detail.join("; "));
    }

    fs::create_dir_all(output_dir)?;
    tracing::info!("Building navigation data to {}", output_dir.display());

    build_series_index(collection, output_dir)?;
    build_series_pages(config, collection, output_dir, site_url)?;
    build_article_navigation(collection, output_dir)?;
    build_feed(config, collection, output_dir, site_url)?;

    tracing::info!("Build complete");
    Ok(())
}

fn build_series_index(collection: &Collection, output_dir: &Path) -> Result<()> {
    let series_dir = output_dir.join("series");
    fs::create_dir_all(&series_dir)?;

    let overview = build_series_overview(collection);
    fs::write(
        series_dir.join("index.json"),
        serde_json::to_string_pretty(&overview)?,
    )?;

    tracing::info!("Built series index with {} series", overview.total_series);
    Ok(())
}

fn build_series_pages(
    config: &Config,
    collection: &Collection,
    output_dir: &Path,
    site_url: &str,
) -> Result<()> {
    let mut written = 0;

    for series in generate_series_list(collection) {
        if !validate_series_slug(&series.slug) {
            tracing::warn!(
                "Skipping series '{}': slug '{}' is empty or too long",
                series.name,
                series.slug
            );
            continue;
        }

        let series_dir = output_dir.join("series").join(&series.slug);
        fs::create_dir_all(&series_dir)?;

        let total_pages = series.count.div_ceil(config.pagination.items_per_page.max(1));
        for page in config.pagination.static_pages(total_pages) {
            let data =
                build_series_page(collection, &series.slug, page, &config.pagination, site_url)
                    .map_err(|e| anyhow::anyhow!("{} ({})", e, e.code()))?;
            fs::write(
                series_dir.join(format!("{}.json", page)),
                serde_json::to_string_pretty(&data)?,
            )?;
            written += 1;
        }
    }

    tracing::info!("Built {} series pages", written);
    Ok(())
}

fn build_article_navigation(collection: &Collection, output_dir: &Path) -> Result<()> {
    let blogs_dir = output_dir.join("blogs");

    for article in collection.articles() {
        let adjacent = match article.series_name.as_deref() {
            Some(name) => get_adjacent_series_posts(collection, &article.slug, name),
            None => get_adjacent_posts(collection, &article.slug),
        };

        let nav = serde_json::json!({
            "slug": article.slug,
            "series": article.series_name,
            "prev": adjacent.prev_post.map(nav_link),
            "next": adjacent.next_post.map(nav_link),
        });

        let article_dir = blogs_dir.join(&article.slug);
        fs::create_dir_all(&article_dir)?;
        fs::write(article_dir.join("nav.json"), serde_json::to_string_pretty(&nav)?)?;
    }

    tracing::info!("Built navigation for {} articles", collection.len());
    Ok(())
}

fn nav_link(article: &Article) -> serde_json::Value {
    serde_json::json!({
        "slug": article.slug,
        "title": article.title,
        "datetime": article.published_iso(),
    })
}

fn build_feed(
    config: &Config,
    collection: &Collection,
    output_dir: &Path,
    site_url: &str,
) -> Result<()> {
    let articles = feed_articles(collection, &config.content.exclude_slug_pattern);
    let rss = generate_rss(&config.site, site_url, &articles);
    fs::write(output_dir.join("feed.xml"), rss)?;

    tracing::info!("Built RSS feed with {} items", articles.len());
    Ok(())
}
