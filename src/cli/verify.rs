use crate::models::{Article, SortOrder};
use crate::services::ordering::{sort_articles, TitleCollator};
use crate::services::series::{find_invalid_slugs, find_slug_collisions, generate_series_list};
use anyhow::{bail, Result};
use std::path::Path;

pub fn run(config_path: &Path) -> Result<()> {
    let (_config, collection) = super::load_site(config_path)?;

    let mut series_list = generate_series_list(&collection);
    let collator = TitleCollator::zh_tw();
    series_list.sort_by(|a, b| collator.compare(&a.name, &b.name));

    println!("total series: {}", series_list.len());
    for series in &series_list {
        let source_order: Vec<&Article> = collection
            .articles()
            .iter()
            .filter(|a| a.series_name.as_deref() == Some(series.name.as_str()))
            .collect();
        let in_order = source_order_matches(&source_order);

        println!("- {}: {} articles", series.name, series.count);
        println!(
            "  order check: {}",
            if in_order {
                "OK"
            } else {
                "WARN (source order differs; pages sort by series position)"
            }
        );
    }

    for name in find_invalid_slugs(&series_list) {
        println!("invalid slug: '{}' has no usable series page and is skipped by build", name);
    }

    let collisions = find_slug_collisions(&series_list);
    if !collisions.is_empty() {
        for collision in &collisions {
            println!(
                "slug collision: '{}' <- {}",
                collision.slug,
                collision.names.join(", ")
            );
        }
        bail!("{} series slug collision(s) found", collisions.len());
    }

    Ok(())
}

/// Whether the loader's order already equals the series order.
pub fn source_order_matches(source_order: &[&Article]) -> bool {
    let sorted = sort_articles(source_order, SortOrder::default());
    sorted
        .iter()
        .zip(source_order)
        .all(|(a, b)| std::ptr::eq(*a, *b))
}
