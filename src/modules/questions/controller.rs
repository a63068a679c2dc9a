use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;

use crate::modules::questions::model::{
    CreateQuestionDto, CreatedQuestionResponse, DeletedQuestionResponse, QuestionListResponse,
    SearchQuestionsDto, SearchResultsResponse,
};
use crate::modules::questions::service::QuestionService;
use crate::state::AppState;
use crate::utils::errors::ApiError;
use crate::utils::pagination::PageParams;

#[utoipa::path(
    get,
    path = "/questions",
    params(PageParams),
    responses(
        (status = 200, description = "Paginated question list", body = QuestionListResponse),
        (status = 404, description = "Resource Not found")
    ),
    tag = "Questions"
)]
#[instrument(skip(state))]
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let response = QuestionService::list(
        &state.db,
        params.page,
        state.pagination_config.questions_per_page,
    )
    .await?;

    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    params(
        ("question_id" = i32, Path, description = "Question id"),
        PageParams
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeletedQuestionResponse),
        (status = 404, description = "Resource Not found"),
        (status = 422, description = "unprocessable")
    ),
    tag = "Questions"
)]
#[instrument(skip(state))]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<i32>,
    Query(params): Query<PageParams>,
) -> Result<Json<DeletedQuestionResponse>, ApiError> {
    let response = QuestionService::delete(
        &state.db,
        question_id,
        params.page,
        state.pagination_config.questions_per_page,
    )
    .await?;

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/questions",
    params(PageParams),
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Question created", body = CreatedQuestionResponse),
        (status = 422, description = "unprocessable")
    ),
    tag = "Questions"
)]
#[instrument(skip(state))]
pub async fn create_question(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    Json(dto): Json<CreateQuestionDto>,
) -> Result<Json<CreatedQuestionResponse>, ApiError> {
    let response = QuestionService::create(
        &state.db,
        dto,
        params.page,
        state.pagination_config.questions_per_page,
    )
    .await?;

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/questions/search",
    params(PageParams),
    request_body = SearchQuestionsDto,
    responses(
        (status = 200, description = "Matching questions", body = SearchResultsResponse),
        (status = 404, description = "Resource Not found")
    ),
    tag = "Questions"
)]
#[instrument(skip(state))]
pub async fn search_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    Json(dto): Json<SearchQuestionsDto>,
) -> Result<Json<SearchResultsResponse>, ApiError> {
    let response = QuestionService::search(
        &state.db,
        &dto.search_term,
        params.page,
        state.pagination_config.questions_per_page,
    )
    .await?;

    Ok(Json(response))
}
