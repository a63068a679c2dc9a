use sqlx::PgPool;

use crate::config::database::init_db_pool;
use crate::config::pagination::PaginationConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub pagination_config: PaginationConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db_pool().await,
        pagination_config: PaginationConfig::from_env(),
    }
}
