use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::{Path, Query},
    http::StatusCode,
    response::Json,
};
use serde_json::{Map, Value};

use crate::{api::ApiError, spotify::SpotifyClient};

pub const DEFAULT_SEARCH_TYPE: &str = "track";

type Found = (StatusCode, Json<Map<String, Value>>);

pub async fn search(
    Path(query): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    Extension(client): Extension<Arc<SpotifyClient>>,
) -> Result<Json<Map<String, Value>>, ApiError> {
    let search_type = params
        .get("type")
        .map(String::as_str)
        .unwrap_or(DEFAULT_SEARCH_TYPE);

    let results = client.search(&query, search_type).await?;
    Ok(Json(results))
}

/// Looks up the track named by the path, never a stale identifier.
pub async fn track(
    Path(music_id): Path<String>,
    Extension(client): Extension<Arc<SpotifyClient>>,
) -> Result<Found, ApiError> {
    Ok(respond(client.get_track(&music_id).await?))
}

pub async fn album(
    Path(album_id): Path<String>,
    Extension(client): Extension<Arc<SpotifyClient>>,
) -> Result<Found, ApiError> {
    Ok(respond(client.get_album(&album_id).await?))
}

pub async fn artist(
    Path(artist_id): Path<String>,
    Extension(client): Extension<Arc<SpotifyClient>>,
) -> Result<Found, ApiError> {
    Ok(respond(client.get_artist(&artist_id).await?))
}

fn respond(result: Map<String, Value>) -> Found {
    if result.is_empty() {
        (StatusCode::NOT_FOUND, Json(result))
    } else {
        (StatusCode::OK, Json(result))
    }
}
