use axum::{Json, extract::State};
use tracing::instrument;

use crate::modules::quizzes::model::{QuizRequestDto, QuizResponse};
use crate::modules::quizzes::service::QuizService;
use crate::state::AppState;
use crate::utils::errors::ApiError;

#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "A random unseen question, or an empty string when the pool is exhausted", body = QuizResponse),
        (status = 422, description = "unprocessable")
    ),
    tag = "Quizzes"
)]
#[instrument(skip(state))]
pub async fn play_quiz(
    State(state): State<AppState>,
    Json(dto): Json<QuizRequestDto>,
) -> Result<Json<QuizResponse>, ApiError> {
    let response = QuizService::next_question(&state.db, dto).await?;

    Ok(Json(response))
}
