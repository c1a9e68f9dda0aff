/// Failures raised by a [`Store`](crate::Store) implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// The handle was used after [`Store::close`](crate::Store::close).
    #[error("Store has been closed")]
    Closed,
}

pub type StoreResult<T> = Result<T, StoreError>;
