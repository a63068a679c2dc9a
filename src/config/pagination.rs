use std::env;

const DEFAULT_QUESTIONS_PER_PAGE: i64 = 10;

/// Page size for question listings, read from `QUESTIONS_PER_PAGE`.
///
/// Carried in the application state so handlers receive it explicitly
/// instead of reaching for a process-wide constant.
#[derive(Clone, Debug)]
pub struct PaginationConfig {
    pub questions_per_page: i64,
}

impl PaginationConfig {
    pub fn from_env() -> Self {
        let questions_per_page = env::var("QUESTIONS_PER_PAGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_QUESTIONS_PER_PAGE);

        Self { questions_per_page }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            questions_per_page: DEFAULT_QUESTIONS_PER_PAGE,
        }
    }
}
