use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable naming the album database file.
pub const DB_PATH_VAR: &str = "ALBUMS_DB_PATH";

/// Fixed port the service listens on.
pub const LISTEN_PORT: u16 = 8080;

/// Runtime settings for the service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the database file holding the `album` table
    pub db_path: PathBuf,
    /// Address the HTTP server binds to. Deliberately loopback-only;
    /// exposing the service beyond localhost is left to a reverse proxy.
    pub addr: SocketAddr,
}

impl Config {
    /// Builds a config from the process environment, honoring a `.env`
    /// file when present.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = match env::var(DB_PATH_VAR) {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("/tmp")) // Fallback to /tmp if cache directory can't be determined
                .join("recordings.duckdb"),
        };

        Config {
            db_path,
            addr: SocketAddr::from(([127, 0, 0, 1], LISTEN_PORT)),
        }
    }
}
