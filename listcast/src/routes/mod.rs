use axum::{
    Router,
    routing::{get, post},
};

use crate::AppStateRef;

mod playlist;
mod upload;

pub fn get_routes(app_state: &AppStateRef) -> Router {
    Router::new()
        .route("/upload", post(upload::upload_playlist))
        .route("/save/{id}", post(playlist::save_playlist))
        .route("/playlists/{file}", get(playlist::serve_playlist))
        .with_state(app_state.clone())
}
