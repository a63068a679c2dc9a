use sqlx::PgPool;
use tracing::instrument;

use crate::modules::categories::model::{CategoriesResponse, Category, category_map};
use crate::utils::errors::ApiError;

pub struct CategoryService;

impl CategoryService {
    /// Raw category fetch, ordered by id. Callers pick the error class their
    /// endpoint collapses to.
    pub async fn fetch_all(db: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(db)
            .await
    }

    /// Category listing for `GET /categories`. This is the only operation
    /// that reports storage failures as 400.
    #[instrument(skip(db))]
    pub async fn list(db: &PgPool) -> Result<CategoriesResponse, ApiError> {
        let categories = Self::fetch_all(db)
            .await
            .map_err(ApiError::invalid_request)?;

        Ok(CategoriesResponse {
            success: true,
            categories: category_map(categories),
        })
    }
}
