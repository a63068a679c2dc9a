use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;

use crate::modules::categories::model::CategoriesResponse;
use crate::modules::categories::service::CategoryService;
use crate::modules::questions::model::SearchResultsResponse;
use crate::modules::questions::service::QuestionService;
use crate::state::AppState;
use crate::utils::errors::ApiError;
use crate::utils::pagination::PageParams;

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Map of category id to type", body = CategoriesResponse),
        (status = 400, description = "Invalid Request Message")
    ),
    tag = "Categories"
)]
#[instrument(skip(state))]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let response = CategoryService::list(&state.db).await?;

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    params(
        ("category_id" = String, Path, description = "Category id, compared as text"),
        PageParams
    ),
    responses(
        (status = 200, description = "Questions in the category", body = SearchResultsResponse),
        (status = 404, description = "Resource Not found")
    ),
    tag = "Categories"
)]
#[instrument(skip(state))]
pub async fn questions_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<Json<SearchResultsResponse>, ApiError> {
    let response = QuestionService::by_category(
        &state.db,
        &category_id,
        params.page,
        state.pagination_config.questions_per_page,
    )
    .await?;

    Ok(Json(response))
}
