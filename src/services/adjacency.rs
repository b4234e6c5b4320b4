//! Prev/next links for a single article page.

use crate::models::{AdjacentPosts, Article, SortOrder};
use crate::services::ordering::sort_articles;
use crate::Collection;

/// Neighbours of a standalone (series-less) article in the newest-first feed.
/// `prev_post` is the newer article, `next_post` the older one.
pub fn get_adjacent_posts<'a>(collection: &'a Collection, current_slug: &str) -> AdjacentPosts<'a> {
    let standalone: Vec<&Article> = collection
        .articles()
        .iter()
        .filter(|a| !a.in_series())
        .collect();
    let sorted = sort_articles(&standalone, SortOrder::DateDesc);

    neighbours(&sorted, current_slug)
}

/// Neighbours of `current_slug` inside the series named exactly `series_name`,
/// in series order.
pub fn get_adjacent_series_posts<'a>(
    collection: &'a Collection,
    current_slug: &str,
    series_name: &str,
) -> AdjacentPosts<'a> {
    let members: Vec<&Article> = collection
        .articles()
        .iter()
        .filter(|a| a.series_name.as_deref() == Some(series_name))
        .collect();
    let sorted = sort_articles(&members, SortOrder::default());

    neighbours(&sorted, current_slug)
}

fn neighbours<'a>(ordered: &[&'a Article], current_slug: &str) -> AdjacentPosts<'a> {
    match ordered.iter().position(|a| a.slug == current_slug) {
        Some(index) => AdjacentPosts::around(ordered, index),
        None => {
            tracing::debug!("No adjacency context for '{}'", current_slug);
            AdjacentPosts::none()
        }
    }
}
