use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::play_quiz;

pub fn init_quizzes_router() -> Router<AppState> {
    Router::new().route("/quizzes", post(play_quiz))
}
