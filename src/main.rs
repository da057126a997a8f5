//! Server binary for the album catalog API.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::info;
use recordings::config::Config;
use recordings::http;
use recordings::store::AlbumStore;

#[derive(Parser)]
#[command(name = "recordings")]
#[command(version, about = "HTTP API over a music album catalog", long_about = None)]
struct Cli {
    /// Override the album database file path
    #[arg(long)]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(path) = cli.db_path {
        config.db_path = path;
    }

    // A store that cannot be reached at startup is fatal.
    let store = AlbumStore::open(&config.db_path).await?;
    store.init_db().await?;
    info!("Connected to album store at {:?}", config.db_path);

    let app = http::router(Arc::new(store));
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Listening on {}", config.addr);
    axum::serve(listener, app).await?;

    Ok(())
}
