use serde::{Deserialize, Deserializer};
use utoipa::IntoParams;

const DEFAULT_PAGE: i64 = 1;

fn deserialize_lenient_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    // Query-string values always arrive as strings; anything that does not
    // parse as an integer falls back to the first page rather than rejecting
    // the request.
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_PAGE))
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

/// 1-based page number taken from the query string, e.g. `/questions?page=3`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PageParams {
    #[serde(default = "default_page", deserialize_with = "deserialize_lenient_page")]
    pub page: i64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE }
    }
}

/// Slice `items` down to the requested page.
///
/// Pages are 1-based and `per_page` items long. There is no upper bound
/// check: a page past the end of the collection is simply empty, and callers
/// treat an empty page as a not-found condition. Non-positive pages land
/// before the first element and are empty as well.
pub fn paginate<T>(items: &[T], page: i64, per_page: i64) -> &[T] {
    if per_page <= 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(per_page);
    if start < 0 || start as usize >= items.len() {
        return &[];
    }

    let start = start as usize;
    let end = items.len().min(start + per_page as usize);
    &items[start..end]
}
