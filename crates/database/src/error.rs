use thiserror::Error;

/// Failures while turning a stored blob back into a range, or vice versa.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Invalid payload JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to load environment variables for database connection: {0}")]
    ConnectionConfigError(String),

    #[error("Failed to connect to the database: {0}")]
    ConnectionError(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("Stored range payload could not be processed: {0}")]
    CodecError(#[from] CodecError),

    #[error("The requested data was not found in the database.")]
    NotFound,
}
