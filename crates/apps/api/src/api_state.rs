use axum::extract::FromRef;
use sqlx::PgPool;

#[derive(Clone)]
pub struct ApiContext {
    pub pool: PgPool,
}

// Lets handlers and extractors take only the pool from the state.
impl FromRef<ApiContext> for PgPool {
    fn from_ref(state: &ApiContext) -> Self {
        state.pool.clone()
    }
}
