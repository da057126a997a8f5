use std::path::Path;

use async_duckdb::ClientBuilder;
use async_duckdb::duckdb::OptionalExt;
use async_duckdb::duckdb::params;
use log::debug;

use crate::store::entities::Album;
use crate::store::errors::{Error, Result};

const ALBUM_TABLE: &str = "album";
const ID_SEQUENCE: &str = "album_id_seq";

/// Handle to the `album` table.
///
/// Wraps an `async_duckdb::Client`, which serializes access to the
/// underlying connection and is safe to share across request tasks.
pub struct AlbumStore {
    client: async_duckdb::Client,
}

impl AlbumStore {
    /// Wraps an already opened client.
    #[must_use]
    pub fn new(client: async_duckdb::Client) -> Self {
        AlbumStore { client }
    }

    /// Opens the database file at `path`, creating it if absent.
    pub async fn open(path: &Path) -> Result<Self> {
        let client: async_duckdb::Client = ClientBuilder::new().path(path).open().await?;
        debug!("Opened album database at {path:?}");
        Ok(AlbumStore { client })
    }

    /// Creates the id sequence and `album` table if they do not exist yet.
    pub async fn init_db(&self) -> Result<()> {
        let table_query = format!(
            "
            CREATE SEQUENCE IF NOT EXISTS {ID_SEQUENCE} START 1;
            CREATE TABLE IF NOT EXISTS {ALBUM_TABLE} (
                id BIGINT PRIMARY KEY DEFAULT nextval('{ID_SEQUENCE}'),
                title TEXT NOT NULL,
                artist TEXT NOT NULL,
                price DOUBLE NOT NULL
            );
        "
        );
        self.client
            .conn(move |conn| conn.execute_batch(&table_query))
            .await?;

        debug!("Successfully initialized album database schema");
        Ok(())
    }

    /// Inserts an album and returns the store-assigned id. The id on the
    /// input album is ignored.
    pub async fn add_album(&self, album: &Album) -> Result<i64> {
        let query = format!(
            "INSERT INTO {ALBUM_TABLE} (title, artist, price) VALUES (?1, ?2, ?3) RETURNING id;"
        );
        let title = album.title.clone();
        let artist = album.artist.clone();
        let price = album.price;

        let id: i64 = self
            .client
            .conn(move |conn| {
                conn.query_row(&query, params![title, artist, price], |row| row.get(0))
            })
            .await?;

        debug!("Inserted album {id}");
        Ok(id)
    }

    /// Looks up a single album by primary key.
    ///
    /// Returns [`Error::AlbumNotFound`] when no row matches.
    pub async fn album_by_id(&self, id: i64) -> Result<Album> {
        let query = format!("SELECT id, title, artist, price FROM {ALBUM_TABLE} WHERE id = ?1;");

        let album = self
            .client
            .conn(move |conn| {
                conn.query_row(&query, params![id], |row| {
                    Ok(Album {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        artist: row.get(2)?,
                        price: row.get(3)?,
                    })
                })
                .optional()
            })
            .await?;

        album.ok_or(Error::AlbumNotFound(id))
    }

    /// Fetches every album by the given artist.
    ///
    /// A name with no matches yields an empty vector, not an error.
    pub async fn albums_by_artist(&self, name: &str) -> Result<Vec<Album>> {
        let query =
            format!("SELECT id, title, artist, price FROM {ALBUM_TABLE} WHERE artist = ?1;");
        let name_owned = name.to_string();

        let albums = self
            .client
            .conn(move |conn| {
                let mut stmt = conn.prepare(&query)?;
                let mut rows = stmt.query(params![name_owned])?;
                let mut albums = vec![];
                while let Some(row) = rows.next()? {
                    albums.push(Album {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        artist: row.get(2)?,
                        price: row.get(3)?,
                    });
                }
                Ok(albums)
            })
            .await?;

        Ok(albums)
    }
}
