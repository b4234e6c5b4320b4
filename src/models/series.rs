use super::{Article, PaginatedResult};
use serde::Serialize;

/// Articles sharing one `parent` name. Derived on demand from the collection,
/// never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Series<'a> {
    pub name: String,
    pub slug: String,
    pub articles: Vec<&'a Article>,
    pub count: usize,
}

/// Read-only projection of a [`Series`] for overview listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub name: String,
    pub slug: String,
    pub count: usize,
    pub latest_date: Option<String>,
    pub first_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOverviewData {
    pub series_list: Vec<SeriesSummary>,
    pub total_series: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreadcrumbItem {
    pub text: String,
    pub url: Option<String>,
    pub active: bool,
}

/// Everything a series listing page needs to render one page of articles.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPageData<'a> {
    pub series: Series<'a>,
    pub paginated_articles: PaginatedResult<&'a Article>,
    pub breadcrumb: Vec<BreadcrumbItem>,
    pub page_title: String,
    pub canonical_url: String,
    pub prev_page: Option<String>,
    pub next_page: Option<String>,
}

/// Two or more distinct series names that normalize to the same slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugCollision {
    pub slug: String,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeriesError {
    #[error("series '{slug}' not found")]
    SeriesNotFound { slug: String },
    #[error("invalid series slug '{slug}'")]
    InvalidSlug { slug: String },
    #[error("page {page} is out of range")]
    InvalidPage { page: usize },
    #[error("series '{slug}' has no articles")]
    EmptySeries { slug: String },
}

impl SeriesError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::SeriesNotFound { .. } => "SERIES_NOT_FOUND",
            Self::InvalidSlug { .. } => "INVALID_SLUG",
            Self::InvalidPage { .. } => "INVALID_PAGE",
            Self::EmptySeries { .. } => "EMPTY_SERIES",
        }
    }
}

pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;
pub const DEFAULT_PREGENERATE_PAGES: usize = 3;
pub const MAX_SERIES_NAME_LENGTH: usize = 100;
pub const MAX_SLUG_LENGTH: usize = 150;
pub const BREADCRUMB_SEPARATOR: &str = " > ";
