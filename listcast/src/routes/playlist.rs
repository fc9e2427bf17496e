use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use channelist_rs::format::{Channel, Playlist};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::{
    AppStateRef, internal_error_with_log, storage::PlaylistStore,
    transfer::generate_playlist_async,
};

#[derive(Deserialize)]
pub struct SaveRequest {
    #[serde(default)]
    pub tvg_url: Option<SmolStr>,
    pub channels: Vec<Channel>,
}

#[derive(Serialize)]
pub struct SaveResponse {
    pub url: String,
}

/// Regenerates m3u text from the edited channel list and overwrites the
/// stored playlist, answering with its shareable link.
pub async fn save_playlist(
    State(state): State<AppStateRef>,
    Path(id): Path<String>,
    Json(request): Json<SaveRequest>,
) -> Result<Json<SaveResponse>, StatusCode> {
    if !PlaylistStore::is_valid_id(&id) || !state.store.exists(&id).await {
        return Err(StatusCode::NOT_FOUND);
    }

    let playlist = Playlist {
        tvg_url: request.tvg_url,
        channels: request.channels,
    };
    let content = generate_playlist_async(playlist)
        .await
        .map_err(internal_error_with_log!("Generate playlist"))?;

    state
        .store
        .write(&id, &content)
        .await
        .map_err(internal_error_with_log!("Store playlist"))?;

    Ok(Json(SaveResponse {
        url: format!("{}/playlists/{}.m3u", state.config.base_url, id),
    }))
}

pub async fn serve_playlist(
    State(state): State<AppStateRef>,
    Path(file): Path<String>,
) -> Result<Response, StatusCode> {
    let Some(id) = file.strip_suffix(".m3u") else {
        return Err(StatusCode::NOT_FOUND);
    };
    if !PlaylistStore::is_valid_id(id) {
        return Err(StatusCode::NOT_FOUND);
    }

    let content = state
        .store
        .read(id)
        .await
        .map_err(internal_error_with_log!("Read playlist"))?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(([(header::CONTENT_TYPE, "audio/mpegurl")], content).into_response())
}
