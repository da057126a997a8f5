/// Album table access using `DuckDB`
pub mod albums;
/// Data entities for albums
pub mod entities;
/// Error types and result aliases
pub mod errors;

pub use albums::AlbumStore;
pub use entities::Album;
