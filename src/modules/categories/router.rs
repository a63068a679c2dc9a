use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{list_categories, questions_by_category};

pub fn init_categories_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions_by_category),
        )
}
