use super::series::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_PREGENERATE_PAGES};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    /// Leading pages of each listing a static build writes out. Later pages
    /// are rendered on request through `build_series_page`.
    #[serde(default = "default_pre_generate_pages")]
    pub pre_generate_pages: usize,
    /// Upper bound on listing pages a static build emits.
    #[serde(default)]
    pub max_pages: Option<usize>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            pre_generate_pages: default_pre_generate_pages(),
            max_pages: None,
        }
    }
}

impl PaginationConfig {
    pub fn with_items_per_page(items_per_page: usize) -> Self {
        Self {
            items_per_page,
            ..Self::default()
        }
    }

    /// Page numbers a static build renders for a listing of `total_pages`,
    /// capped by `pre_generate_pages` and `max_pages`. Page 1 is always
    /// rendered so an empty listing still gets its index.
    pub fn static_pages(&self, total_pages: usize) -> std::ops::RangeInclusive<usize> {
        let mut last = total_pages.min(self.pre_generate_pages);
        if let Some(cap) = self.max_pages {
            last = last.min(cap);
        }
        1..=last.max(1)
    }
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_pre_generate_pages() -> usize {
    DEFAULT_PREGENERATE_PAGES
}

/// One page of an ordered listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> PaginatedResult<T> {
    /// Human readable position summary, in the site's zh-TW wording.
    pub fn summary(&self) -> String {
        if self.total_items == 0 {
            return "沒有資料".to_string();
        }

        if self.total_pages <= 1 {
            return format!("共 {} 項", self.total_items);
        }

        let start_item = (self.current_page - 1) * self.items_per_page + 1;
        let end_item = (self.current_page * self.items_per_page).min(self.total_items);

        format!(
            "第 {}-{} 項，共 {} 項（第 {}/{} 頁）",
            start_item, end_item, self.total_items, self.current_page, self.total_pages
        )
    }
}
