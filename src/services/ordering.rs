//! Total orders over articles, used inside a series and for whole-feed views.

use crate::models::{Article, SortOrder};
use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use std::cmp::Ordering;

/// Locale-aware title comparison following Traditional Chinese (zh-TW) rules:
/// ideographs order by stroke count, not by pinyin.
pub struct TitleCollator {
    collator: Option<Collator>,
}

impl TitleCollator {
    pub fn zh_tw() -> Self {
        match Collator::try_new(&locale!("zh-TW-u-co-stroke").into(), CollatorOptions::new()) {
            Ok(collator) => Self {
                collator: Some(collator),
            },
            Err(e) => {
                tracing::warn!("zh-TW collation unavailable, using code point order: {}", e);
                Self { collator: None }
            }
        }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}

pub struct ArticleComparator {
    order: SortOrder,
    collator: Option<TitleCollator>,
}

impl ArticleComparator {
    pub fn new(order: SortOrder) -> Self {
        let collator = matches!(order, SortOrder::TitleAsc | SortOrder::TitleDesc)
            .then(TitleCollator::zh_tw);
        Self { order, collator }
    }

    pub fn compare(&self, a: &Article, b: &Article) -> Ordering {
        match self.order {
            SortOrder::SeriesIndexAsc => by_series_index_asc(a, b),
            // Swapped arguments, so the publish-time tie-break flips as well.
            SortOrder::SeriesIndexDesc => by_series_index_asc(b, a),
            SortOrder::DateAsc => by_date_asc(a, b),
            SortOrder::DateDesc => by_date_asc(b, a),
            SortOrder::TitleAsc => self.compare_titles(a, b),
            SortOrder::TitleDesc => self.compare_titles(b, a),
        }
    }

    fn compare_titles(&self, a: &Article, b: &Article) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(&a.title, &b.title),
            None => a.title.cmp(&b.title),
        }
    }
}

/// Stable sort of `articles` into a new vector.
pub fn sort_articles<'a>(articles: &[&'a Article], order: SortOrder) -> Vec<&'a Article> {
    let comparator = ArticleComparator::new(order);
    let mut sorted = articles.to_vec();
    sorted.sort_by(|a, b| comparator.compare(a, b));
    sorted
}

/// Explicit position first, unpositioned articles last; ties go to the older
/// article.
fn by_series_index_asc(a: &Article, b: &Article) -> Ordering {
    let by_position = match (a.series_position, b.series_position) {
        (Some(pa), Some(pb)) => pa.cmp(&pb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_position.then_with(|| by_date_asc(a, b))
}

/// Unparseable timestamps (`None`) order before every real instant.
fn by_date_asc(a: &Article, b: &Article) -> Ordering {
    a.published_at.cmp(&b.published_at)
}
