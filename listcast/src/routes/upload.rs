use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use channelist_rs::format::Channel;
use serde::Serialize;
use smol_str::SmolStr;

use crate::{
    AppStateRef, bad_request_with_log, internal_error_with_log, transfer::parse_playlist_async,
};

#[derive(Serialize)]
pub struct UploadResponse {
    pub playlist_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvg_url: Option<SmolStr>,
    pub channels: Vec<Channel>,
}

/// Accepts a multipart `file` field holding an .m3u/.m3u8 playlist,
/// stores the raw text under a fresh id and returns the parsed channels
/// for client-side editing.
pub async fn upload_playlist(
    State(state): State<AppStateRef>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, StatusCode> {
    let mut content = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(bad_request_with_log!("Read multipart"))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default();
        if !file_name.ends_with(".m3u") && !file_name.ends_with(".m3u8") {
            return Err(StatusCode::BAD_REQUEST);
        }

        let data = field
            .bytes()
            .await
            .map_err(bad_request_with_log!("Read upload"))?;

        // invalid encodings degrade lossily instead of rejecting the file
        content = Some(String::from_utf8_lossy(&data).into_owned());
        break;
    }

    let Some(content) = content else {
        return Err(StatusCode::BAD_REQUEST);
    };

    let playlist = parse_playlist_async(content.clone())
        .await
        .map_err(internal_error_with_log!("Parse playlist"))?;

    let playlist_id = state
        .store
        .create(&content)
        .await
        .map_err(internal_error_with_log!("Store playlist"))?;

    Ok(Json(UploadResponse {
        playlist_id,
        tvg_url: playlist.tvg_url,
        channels: playlist.channels,
    }))
}
