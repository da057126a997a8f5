use thiserror::Error;

/// Errors produced by the storage layer.
#[derive(Error, Debug)]
pub enum Error {
    /// No row in the `album` table matches the requested id. Callers match
    /// on this variant, never on message text.
    #[error("no album with id {0}")]
    AlbumNotFound(i64),

    /// Any other failure reported by the DuckDB driver.
    #[error("storage error: {0}")]
    Storage(#[from] async_duckdb::Error),
}

impl Error {
    /// Whether this error is the distinguished not-found condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::AlbumNotFound(_))
    }
}

/// Result alias used throughout the storage layer.
pub type Result<T> = std::result::Result<T, Error>;
