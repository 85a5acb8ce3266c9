use crate::error::DbError;
use configuration::DatabaseConfig;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::env;
use std::time::Duration;

/// Establishes a connection pool to the PostgreSQL database.
///
/// The URL comes from `database.url` when set, otherwise from `DATABASE_URL`
/// (a `.env` file in the working directory is loaded first, if present).
pub async fn connect(settings: &DatabaseConfig) -> Result<PgPool, DbError> {
    let database_url = match &settings.url {
        Some(url) => url.clone(),
        None => {
            dotenvy::dotenv().ok();
            env::var("DATABASE_URL").map_err(|_e| {
                DbError::ConnectionConfigError(
                    "database.url or DATABASE_URL must be set.".to_string(),
                )
            })?
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect(&database_url)
        .await?;

    tracing::info!(max_connections = settings.max_connections, "Connected to PostgreSQL.");
    Ok(pool)
}

/// Applies the embedded migrations so the `ranges` table exists.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    // Use a relative path from the crate root
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations applied.");
    Ok(())
}
