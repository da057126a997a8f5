//! HTTP surface of the album catalog.
//!
//! Three routes map to the three store operations. Handlers parse the
//! request, call the store, and map domain errors onto status codes;
//! driver detail never reaches the client on a 500.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::error;
use serde::{Deserialize, Serialize};

use crate::store::entities::Album;
use crate::store::errors::Error;
use crate::store::AlbumStore;

/// JSON body returned on any handler failure.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description of the failure
    pub error: String,
    /// Mirrors the HTTP status code
    pub code: u16,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Query parameters for the artist lookup route.
#[derive(Debug, Deserialize)]
pub struct ArtistQuery {
    /// Artist name to filter on
    #[serde(default)]
    pub name: String,
}

/// Query parameters for the by-id lookup route.
#[derive(Debug, Deserialize)]
pub struct AlbumIdQuery {
    /// Base-10 album id, parsed by the handler so bad input maps to 400
    /// before any store call
    #[serde(rename = "albumId", default)]
    pub album_id: String,
}

/// Builds the album API router.
///
/// Non-matching methods get 405 from the method routers without reaching
/// a handler.
pub fn router(store: Arc<AlbumStore>) -> Router {
    Router::new()
        .route("/albums", post(add_album_handler))
        .route("/albums/artist", get(albums_by_artist_handler))
        .route("/albums/get", get(album_by_id_handler))
        .with_state(store)
}

fn bad_request(error: String) -> HandlerError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse { error, code: 400 }),
    )
}

/// Logs the full store failure and returns a redacted 500 response.
fn storage_failure(err: &Error) -> HandlerError {
    error!("storage failure: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "internal storage error".to_string(),
            code: 500,
        }),
    )
}

// The body is taken as a raw string and parsed here rather than through the
// Json extractor, so every malformed body maps to 400 with the parse error.
async fn add_album_handler(
    State(store): State<Arc<AlbumStore>>,
    body: String,
) -> Result<Json<i64>, HandlerError> {
    let album: Album = serde_json::from_str(&body).map_err(|e| bad_request(e.to_string()))?;

    let id = store
        .add_album(&album)
        .await
        .map_err(|e| storage_failure(&e))?;

    Ok(Json(id))
}

async fn albums_by_artist_handler(
    State(store): State<Arc<AlbumStore>>,
    Query(query): Query<ArtistQuery>,
) -> Result<Json<Vec<Album>>, HandlerError> {
    if query.name.is_empty() {
        return Err(bad_request("artist name missing".to_string()));
    }

    let albums = store
        .albums_by_artist(&query.name)
        .await
        .map_err(|e| storage_failure(&e))?;

    Ok(Json(albums))
}

async fn album_by_id_handler(
    State(store): State<Arc<AlbumStore>>,
    Query(query): Query<AlbumIdQuery>,
) -> Result<Json<Album>, HandlerError> {
    let id: i64 = query
        .album_id
        .parse()
        .map_err(|_| bad_request("invalid album id".to_string()))?;

    match store.album_by_id(id).await {
        Ok(album) => Ok(Json(album)),
        Err(err) if err.is_not_found() => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: err.to_string(),
                code: 404,
            }),
        )),
        Err(err) => Err(storage_failure(&err)),
    }
}
