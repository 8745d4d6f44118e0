use app_state::DatabaseSettings;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Pool, Postgres};
use std::time::Duration;
use tracing::info;

/// Get a database connection pool.
/// # Errors
///
/// * `PgPool::connect` can return an error if the database connection fails.
pub async fn get_db_pool(
    database_url: &str,
    db_settings: &DatabaseSettings,
) -> color_eyre::Result<Pool<Postgres>> {
    info!("Connecting to database.");
    let pool = PgPoolOptions::new()
        .max_connections(db_settings.max_connections)
        .min_connections(db_settings.min_connections)
        .max_lifetime(Duration::from_secs(db_settings.max_lifetime))
        .idle_timeout(Duration::from_secs(db_settings.idle_timeout))
        .acquire_timeout(Duration::from_secs(db_settings.acquire_timeout))
        .test_before_acquire(true)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Creates the `invite` and `attendee` tables if they are not there yet.
pub async fn run_migrations(pool: &PgPool) -> color_eyre::Result<()> {
    sqlx::migrate!("../../../migrations").run(pool).await?;
    info!("Database migrations are up to date.");
    Ok(())
}
