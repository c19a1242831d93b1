use thiserror::Error;

/// Storage-layer error type. Endpoint handlers catch this at the boundary
/// and convert it into a failure envelope; it never maps to an HTTP status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
