use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single blog entry as handed over by the content loader.
///
/// Articles are immutable once loaded; the services only read and regroup
/// them. `series_name` is stored trimmed, and a blank `parent` is stored as
/// `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    /// The `datetime` frontmatter value exactly as written.
    pub datetime: String,
    /// `datetime` resolved to an instant, `None` when it could not be parsed.
    pub published_at: Option<DateTime<Utc>>,
    pub series_name: Option<String>,
    pub series_position: Option<u32>,
    pub is_enabled: bool,
}

impl Article {
    pub fn new(id: &str, slug: &str, title: &str, datetime: &str) -> Self {
        Self {
            id: id.to_string(),
            slug: slug.to_string(),
            title: title.to_string(),
            description: None,
            image: None,
            datetime: datetime.to_string(),
            published_at: parse_datetime(datetime),
            series_name: None,
            series_position: None,
            is_enabled: true,
        }
    }

    pub fn with_series(mut self, name: &str, position: Option<u32>) -> Self {
        self.series_name = normalize_series_name(Some(name));
        self.series_position = position;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.is_enabled = false;
        self
    }

    pub fn in_series(&self) -> bool {
        self.series_name.is_some()
    }

    /// ISO-8601 rendering of the publish instant, if it parsed.
    pub fn published_iso(&self) -> Option<String> {
        self.published_at.map(to_iso_string)
    }
}

/// Raw frontmatter of a blog file, before it becomes an [`Article`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleFrontmatter {
    pub title: String,
    pub datetime: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub parent: Option<String>,
    pub series_index: Option<u32>,
    pub is_enabled: Option<bool>,
    pub slug: Option<String>,
}

impl ArticleFrontmatter {
    /// `slug` is the path-derived fallback, used when the frontmatter has no
    /// slug or one that is not a plain relative path.
    pub fn into_article(self, id: &str, slug: &str) -> Article {
        let slug = match self.slug.as_deref().map(str::trim) {
            Some(custom) if is_relative_slug(custom) => custom,
            Some(custom) => {
                tracing::warn!("Ignoring slug '{}' on {}: not a relative path", custom, id);
                slug
            }
            None => slug,
        };
        Article {
            id: id.to_string(),
            slug: slug.to_string(),
            title: self.title,
            description: self.description,
            image: self.image,
            published_at: parse_datetime(&self.datetime),
            datetime: self.datetime,
            series_name: normalize_series_name(self.parent.as_deref()),
            series_position: self.series_index,
            is_enabled: self.is_enabled.unwrap_or(true),
        }
    }
}

/// Non-empty `/`-separated segments, none of them `.` or `..`.
fn is_relative_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.contains('\\')
        && slug
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "seriesIndex-asc")]
    SeriesIndexAsc,
    #[serde(rename = "seriesIndex-desc")]
    SeriesIndexDesc,
    #[serde(rename = "date-asc")]
    DateAsc,
    #[serde(rename = "date-desc")]
    DateDesc,
    #[serde(rename = "title-asc")]
    TitleAsc,
    #[serde(rename = "title-desc")]
    TitleDesc,
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "seriesindex-asc" => Ok(Self::SeriesIndexAsc),
            "seriesindex-desc" => Ok(Self::SeriesIndexDesc),
            "date-asc" => Ok(Self::DateAsc),
            "date-desc" => Ok(Self::DateDesc),
            "title-asc" => Ok(Self::TitleAsc),
            "title-desc" => Ok(Self::TitleDesc),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SeriesIndexAsc => write!(f, "seriesIndex-asc"),
            Self::SeriesIndexDesc => write!(f, "seriesIndex-desc"),
            Self::DateAsc => write!(f, "date-asc"),
            Self::DateDesc => write!(f, "date-desc"),
            Self::TitleAsc => write!(f, "title-asc"),
            Self::TitleDesc => write!(f, "title-desc"),
        }
    }
}

/// Prev/next neighbours of an article. Either side may be missing.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct AdjacentPosts<'a> {
    pub prev_post: Option<&'a Article>,
    pub next_post: Option<&'a Article>,
}

impl<'a> AdjacentPosts<'a> {
    pub fn none() -> Self {
        Self::default()
    }

    /// Neighbours of position `index` within `ordered`.
    pub fn around(ordered: &[&'a Article], index: usize) -> Self {
        Self {
            prev_post: index.checked_sub(1).map(|i| ordered[i]),
            next_post: ordered.get(index + 1).copied(),
        }
    }
}

pub fn normalize_series_name(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Parses the loose date formats found in blog frontmatter. Values without an
/// offset are taken as UTC.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    const DATETIME_FORMATS: [&str; 5] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
    ];
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }

    None
}

pub fn to_iso_string(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
