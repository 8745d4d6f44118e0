use app_state::AppSettings;
use color_eyre::eyre::{Result, bail};
use common_services::database::{get_db_pool, run_migrations};
use reqwest::Client;
use sqlx::{Executor, PgPool};
use std::net::TcpListener;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Points `base_settings` at the test database and a free local port.
pub fn create_test_settings(database_name: &str, base_settings: &AppSettings) -> Result<AppSettings> {
    let mut settings = base_settings.clone();
    settings.api.host = "127.0.0.1".to_owned();
    settings.api.port = get_free_port()?;
    settings.secrets.database_url = database_url_for(&settings.secrets.database_url, database_name)?;
    Ok(settings)
}

/// Recreates `database_name` from scratch and migrates it.
///
/// Returns the pool for the test database and the management pool used to drop it later.
pub async fn create_test_database(
    base_settings: &AppSettings,
    database_name: &str,
) -> Result<(PgPool, PgPool)> {
    let management_url = database_url_for(&base_settings.secrets.database_url, "postgres")?;
    let management_pool = get_db_pool(&management_url, &base_settings.database).await?;
    force_drop_db(&management_pool, database_name).await;

    management_pool
        .execute(format!("CREATE DATABASE \"{database_name}\"").as_str())
        .await?;

    let test_url = database_url_for(&base_settings.secrets.database_url, database_name)?;
    let pool = get_db_pool(&test_url, &base_settings.database).await?;
    run_migrations(&pool).await?;
    info!("Finished database migrations for {}", database_name);

    Ok((pool, management_pool))
}

pub async fn force_drop_db(management_pool: &PgPool, database_name: &str) {
    // DROP DATABASE cannot run as a prepared statement.
    let _ = management_pool
        .execute(format!("DROP DATABASE IF EXISTS \"{database_name}\" WITH (FORCE)").as_str())
        .await;
}

pub fn get_free_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}

pub async fn wait_for_healthy_api(client: &Client, base_url: &str) -> Result<()> {
    let health_url = format!("{base_url}/health");
    for _ in 0..50 {
        match client.get(&health_url).send().await {
            Ok(response) if response.status().is_success() => return Ok(()),
            _ => tokio::time::sleep(Duration::from_millis(100)).await,
        }
    }
    bail!("API at {base_url} did not become healthy")
}

fn database_url_for(base_url: &str, database_name: &str) -> Result<String> {
    let mut url = Url::parse(base_url)?;
    url.set_path(&format!("/{database_name}"));
    Ok(url.to_string())
}
