use crate::models::{SeriesError, BREADCRUMB_SEPARATOR};
use crate::services::pages::{build_series_overview, build_series_page};
use anyhow::Result;
use std::path::Path;

pub fn run(config_path: &Path, slug: Option<String>, page: usize) -> Result<()> {
    let (config, collection) = super::load_site(config_path)?;

    let Some(slug) = slug else {
        let overview = build_series_overview(&collection);
        println!("{:<30} {:<30} {:>5}  {:<10}", "SERIES", "SLUG", "COUNT", "LATEST");
        println!("{}", "-".repeat(80));
        for summary in &overview.series_list {
            let latest = summary
                .latest_date
                .as_deref()
                .map(|d| d.split('T').next().unwrap_or(d))
                .unwrap_or("-");
            println!(
                "{:<30} {:<30} {:>5}  {:<10}",
                summary.name, summary.slug, summary.count, latest
            );
        }
        println!("\n{} series", overview.total_series);
        return Ok(());
    };

    let data = build_series_page(&collection, &slug, page, &config.pagination, &config.site.url)
        .map_err(|e: SeriesError| anyhow::anyhow!("{}: {}", e.code(), e))?;

    let trail: Vec<&str> = data.breadcrumb.iter().map(|b| b.text.as_str()).collect();
    println!("{}", trail.join(BREADCRUMB_SEPARATOR));
    println!("{}\n", data.page_title);
    for (offset, article) in data.paginated_articles.items.iter().enumerate() {
        let number = (data.paginated_articles.current_page - 1) * data.paginated_articles.items_per_page
            + offset
            + 1;
        let position = article
            .series_position
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:>3}. [{:>3}] {}  ({})", number, position, article.title, article.slug);
    }
    println!("\n{}", data.paginated_articles.summary());
    if let Some(prev) = &data.prev_page {
        println!("prev: {}", prev);
    }
    if let Some(next) = &data.next_page {
        println!("next: {}", next);
    }

    Ok(())
}
