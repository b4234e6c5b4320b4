//! Page-level view data for the series overview and series listing pages.

use crate::models::{
    BreadcrumbItem, PaginationConfig, SeriesError, SeriesOverviewData, SeriesPageData,
};
use crate::services::pagination::{create_page_url, create_pagination, is_valid_page};
use crate::services::series::{find_series_by_slug, generate_series_list, get_series_summary};
use crate::services::slug::validate_series_slug;
use crate::Collection;

pub const SERIES_INDEX_PATH: &str = "/series";

pub fn series_path(slug: &str) -> String {
    format!("{}/{}", SERIES_INDEX_PATH, slug)
}

pub fn build_series_overview(collection: &Collection) -> SeriesOverviewData {
    let series_list: Vec<_> = generate_series_list(collection)
        .iter()
        .map(get_series_summary)
        .collect();

    SeriesOverviewData {
        total_series: series_list.len(),
        series_list,
    }
}

/// Data for page `page` of the series at `/series/{slug}`.
///
/// Unlike [`create_pagination`], a page outside the listing is an error here:
/// the caller is resolving a route, and a missing route should not render.
pub fn build_series_page<'a>(
    collection: &'a Collection,
    slug: &str,
    page: usize,
    config: &PaginationConfig,
    site_url: &str,
) -> Result<SeriesPageData<'a>, SeriesError> {
    if !validate_series_slug(slug) {
        return Err(SeriesError::InvalidSlug {
            slug: slug.to_string(),
        });
    }

    let series = find_series_by_slug(collection, slug).ok_or_else(|| SeriesError::SeriesNotFound {
        slug: slug.to_string(),
    })?;
    if series.articles.is_empty() {
        return Err(SeriesError::EmptySeries {
            slug: slug.to_string(),
        });
    }

    let paginated_articles = create_pagination(&series.articles, page, config);
    if !is_valid_page(page, paginated_articles.total_pages) {
        return Err(SeriesError::InvalidPage { page });
    }

    let base_url = series_path(&series.slug);
    let page_title = if page > 1 {
        format!("{} - 第 {} 頁", series.name, page)
    } else {
        series.name.clone()
    };
    let canonical_url = format!(
        "{}{}",
        site_url.trim_end_matches('/'),
        create_page_url(&base_url, page)
    );
    let prev_page = paginated_articles
        .has_prev
        .then(|| create_page_url(&base_url, page - 1));
    let next_page = paginated_articles
        .has_next
        .then(|| create_page_url(&base_url, page + 1));

    Ok(SeriesPageData {
        breadcrumb: breadcrumb(&series.name),
        series,
        paginated_articles,
        page_title,
        canonical_url,
        prev_page,
        next_page,
    })
}

fn breadcrumb(series_name: &str) -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem {
            text: "首頁".to_string(),
            url: Some("/".to_string()),
            active: false,
        },
        BreadcrumbItem {
            text: "系列文章".to_string(),
            url: Some(SERIES_INDEX_PATH.to_string()),
            active: false,
        },
        BreadcrumbItem {
            text: series_name.to_string(),
            url: None,
            active: true,
        },
    ]
}
