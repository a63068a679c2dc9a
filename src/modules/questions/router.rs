use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{create_question, delete_question, list_questions, search_questions};

pub fn init_questions_router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{question_id}", delete(delete_question))
        // GET is also routed, but the search term still comes from the body.
        .route(
            "/questions/search",
            post(search_questions).get(search_questions),
        )
}
