use crate::models::MAX_SLUG_LENGTH;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use slug::slugify;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SlugOptions {
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_true")]
    pub remove_special_chars: bool,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            separator: default_separator(),
            remove_special_chars: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_separator() -> String {
    "-".to_string()
}

/// Turns a series name into a URL segment. CJK ideographs are kept as-is so
/// Chinese series names stay readable in the address bar.
pub fn create_slug(name: &str, options: &SlugOptions) -> String {
    let mut processed = name.trim().to_string();

    if options.lowercase {
        processed = processed.to_lowercase();
    }

    processed = WHITESPACE_RUN
        .replace_all(&processed, regex::NoExpand(&options.separator))
        .into_owned();

    // The separator is matched as a whole; its characters alone are stripped.
    if options.remove_special_chars {
        processed = processed
            .split(options.separator.as_str())
            .map(|part| part.chars().filter(|c| is_slug_char(*c)).collect::<String>())
            .collect::<Vec<_>>()
            .join(&options.separator);
    }

    processed
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// ASCII slug for an article path segment.
pub fn generate_slug(title: &str) -> String {
    slugify(title)
}

/// Shape check for a series slug arriving from a URL.
pub fn validate_series_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.chars().count() > MAX_SLUG_LENGTH {
        return false;
    }
    !slug.chars().any(char::is_whitespace)
}
