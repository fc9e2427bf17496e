use channelist_rs::format::Playlist;
use tokio::task::JoinError;

/// Parse playlist text on a blocking worker; uploaded playlists can run
/// to tens of thousands of lines.
pub async fn parse_playlist_async(content: String) -> Result<Playlist, JoinError> {
    tokio::task::spawn_blocking(move || channelist_rs::parse_str(&content)).await
}

/// Counterpart of [`parse_playlist_async`] for the generate direction.
pub async fn generate_playlist_async(playlist: Playlist) -> Result<String, JoinError> {
    tokio::task::spawn_blocking(move || playlist.to_m3u()).await
}
