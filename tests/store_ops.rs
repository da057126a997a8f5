//! Store-level tests for the album table operations.

use recordings::store::errors::Error;
use recordings::store::{Album, AlbumStore};
use tempfile::TempDir;

async fn open_store() -> (TempDir, AlbumStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = AlbumStore::open(&dir.path().join("albums.duckdb"))
        .await
        .expect("open store");
    store.init_db().await.expect("init schema");
    (dir, store)
}

fn album(title: &str, artist: &str, price: f64) -> Album {
    Album {
        id: 0,
        title: title.to_string(),
        artist: artist.to_string(),
        price,
    }
}

#[tokio::test]
async fn add_then_get_roundtrip() {
    let (_dir, store) = open_store().await;

    let input = album("Blue Train", "John Coltrane", 56.99);
    let id = store.add_album(&input).await.expect("insert album");
    assert!(id > 0);

    let fetched = store.album_by_id(id).await.expect("fetch album");
    assert_eq!(
        fetched,
        Album {
            id,
            ..input.clone()
        }
    );
}

#[tokio::test]
async fn ids_are_assigned_from_one() {
    let (_dir, store) = open_store().await;

    let first = store
        .add_album(&album("Giant Steps", "John Coltrane", 63.99))
        .await
        .expect("first insert");
    let second = store
        .add_album(&album("Jeru", "Gerry Mulligan", 17.99))
        .await
        .expect("second insert");

    assert_eq!(first, 1);
    assert_eq!(second, 2);
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let (_dir, store) = open_store().await;

    let err = store.album_by_id(999).await.expect_err("no such album");
    assert!(matches!(err, Error::AlbumNotFound(999)));
}

#[tokio::test]
async fn artist_with_no_rows_yields_empty_list() {
    let (_dir, store) = open_store().await;
    store
        .add_album(&album("Sarah Vaughan", "Sarah Vaughan", 34.98))
        .await
        .expect("insert album");

    let albums = store
        .albums_by_artist("Betty Carter")
        .await
        .expect("artist lookup");
    assert!(albums.is_empty());
}

#[tokio::test]
async fn artist_lookup_returns_all_matches() {
    let (_dir, store) = open_store().await;

    store
        .add_album(&album("Blue Train", "John Coltrane", 56.99))
        .await
        .expect("insert album");
    store
        .add_album(&album("Giant Steps", "John Coltrane", 63.99))
        .await
        .expect("insert album");
    store
        .add_album(&album("Jeru", "Gerry Mulligan", 17.99))
        .await
        .expect("insert album");

    let albums = store
        .albums_by_artist("John Coltrane")
        .await
        .expect("artist lookup");

    assert_eq!(albums.len(), 2);
    assert!(albums.iter().all(|a| a.artist == "John Coltrane"));
    assert_ne!(albums[0].id, albums[1].id);
}
