//! Slicing ordered listings into pages, plus the `?page=N` URL helpers.

use crate::models::{PaginatedResult, PaginationConfig};
use url::Url;

/// Cuts `items` down to page `current_page`.
///
/// Out-of-range pages are clamped, never rejected. An empty listing reports
/// `total_pages == 0` while still sitting on page 1 with no items.
pub fn create_pagination<T: Clone>(
    items: &[T],
    current_page: usize,
    config: &PaginationConfig,
) -> PaginatedResult<T> {
    let items_per_page = config.items_per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(items_per_page);

    let safe_page = current_page.min(total_pages).max(1);

    let start_index = ((safe_page - 1) * items_per_page).min(total_items);
    let end_index = (start_index + items_per_page).min(total_items);

    PaginatedResult {
        items: items[start_index..end_index].to_vec(),
        current_page: safe_page,
        total_pages,
        total_items,
        items_per_page,
        has_next: safe_page < total_pages,
        has_prev: safe_page > 1,
    }
}

/// URL for page `page` of the listing at `base_url`. Page 1 is the bare URL.
pub fn create_page_url(base_url: &str, page: usize) -> String {
    if page <= 1 {
        return base_url.to_string();
    }

    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{}{}page={}", base_url, separator, page)
}

/// Reads the `page` query parameter, falling back to 1 when it is missing,
/// not a number, or below 1. Relative URLs are accepted.
pub fn parse_page_from_url(url: &str) -> usize {
    let Some(parsed) = parse_url_lenient(url) else {
        return 1;
    };

    parsed
        .query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| parse_leading_int(&value))
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

pub fn is_valid_page(page: usize, total_pages: usize) -> bool {
    page >= 1 && page <= total_pages
}

fn parse_url_lenient(url: &str) -> Option<Url> {
    match Url::parse(url) {
        Ok(parsed) => Some(parsed),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse("http://localhost/").ok()?;
            base.join(url).ok()
        }
        Err(_) => None,
    }
}

/// Integer prefix of `value` (`"3abc"` reads as 3). Negative numbers come back
/// as 0 so the caller's lower bound rejects them.
fn parse_leading_int(value: &str) -> Option<usize> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    if negative {
        return Some(0);
    }

    Some(rest[..digits_len].parse().unwrap_or(usize::MAX))
}
