//! Series aggregation: grouping articles by their `parent` name.

use crate::models::{to_iso_string, Article, Series, SeriesSummary, SlugCollision, SortOrder};
use crate::services::ordering::sort_articles;
use crate::services::slug::{create_slug, validate_series_slug};
use crate::Collection;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// All series in the collection, most recently updated first.
///
/// Members are ordered by series position. Series whose newest articles share
/// a timestamp keep the order in which they first appear in the collection.
pub fn generate_series_list(collection: &Collection) -> Vec<Series<'_>> {
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&Article>)> = Vec::new();

    for article in collection.articles() {
        let Some(name) = article.series_name.as_deref() else {
            continue;
        };
        match index_by_name.get(name).copied() {
            Some(idx) => groups[idx].1.push(article),
            None => {
                index_by_name.insert(name, groups.len());
                groups.push((name, vec![article]));
            }
        }
    }

    let mut series_list: Vec<Series<'_>> = groups
        .into_iter()
        .map(|(name, articles)| Series {
            name: name.to_string(),
            slug: create_slug(name, collection.slug_options()),
            count: articles.len(),
            articles: sort_articles(&articles, SortOrder::default()),
        })
        .collect();

    series_list.sort_by(|a, b| latest_publish_time(b).cmp(&latest_publish_time(a)));

    tracing::debug!("Aggregated {} series", series_list.len());
    series_list
}

/// First series, in [`generate_series_list`] order, whose slug is `slug`.
pub fn find_series_by_slug<'a>(collection: &'a Collection, slug: &str) -> Option<Series<'a>> {
    generate_series_list(collection)
        .into_iter()
        .find(|series| series.slug == slug)
}

pub fn get_series_summary(series: &Series<'_>) -> SeriesSummary {
    let dates = || series.articles.iter().filter_map(|a| a.published_at);

    SeriesSummary {
        name: series.name.clone(),
        slug: series.slug.clone(),
        count: series.count,
        latest_date: dates().max().map(to_iso_string),
        first_date: dates().min().map(to_iso_string),
    }
}

/// Slugs claimed by more than one series name, in first-seen order.
pub fn find_slug_collisions(series_list: &[Series<'_>]) -> Vec<SlugCollision> {
    let mut collisions: Vec<SlugCollision> = Vec::new();

    for series in series_list {
        match collisions.iter_mut().find(|c| c.slug == series.slug) {
            Some(existing) => existing.names.push(series.name.clone()),
            None => collisions.push(SlugCollision {
                slug: series.slug.clone(),
                names: vec![series.name.clone()],
            }),
        }
    }

    collisions.retain(|c| c.names.len() > 1);
    for collision in &collisions {
        tracing::warn!(
            "Series slug '{}' is shared by: {}",
            collision.slug,
            collision.names.join(", ")
        );
    }
    collisions
}

/// Names of series whose slug cannot be routed: empty, or longer than
/// `MAX_SLUG_LENGTH` characters.
pub fn find_invalid_slugs(series_list: &[Series<'_>]) -> Vec<String> {
    series_list
        .iter()
        .filter(|series| !validate_series_slug(&series.slug))
        .map(|series| series.name.clone())
        .collect()
}

fn latest_publish_time(series: &Series<'_>) -> Option<DateTime<Utc>> {
    series.articles.iter().filter_map(|a| a.published_at).max()
}
