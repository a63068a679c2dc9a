use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use trivia_api::config::pagination::PaginationConfig;
use trivia_api::router::init_router;
use trivia_api::state::AppState;

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState {
        db: pool,
        pagination_config: PaginationConfig::default(),
    };
    init_router(state)
}

#[allow(dead_code)]
pub async fn seed_category(pool: &PgPool, kind: &str) -> i32 {
    sqlx::query_scalar::<_, i32>("INSERT INTO categories (type) VALUES ($1) RETURNING id")
        .bind(kind)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn seed_question(
    pool: &PgPool,
    question: &str,
    answer: &str,
    category: Option<&str>,
    difficulty: Option<i32>,
) -> i32 {
    sqlx::query_scalar::<_, i32>(
        r#"INSERT INTO questions (question, answer, category, difficulty)
           VALUES ($1, $2, $3, $4)
           RETURNING id"#,
    )
    .bind(question)
    .bind(answer)
    .bind(category)
    .bind(difficulty)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn question_exists(pool: &PgPool, id: i32) -> bool {
    sqlx::query_scalar::<_, i32>("SELECT id FROM questions WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .unwrap()
        .is_some()
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, body)
}

#[allow(dead_code)]
pub async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

#[allow(dead_code)]
pub async fn post_json(
    app: axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

#[allow(dead_code)]
pub async fn delete(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}
