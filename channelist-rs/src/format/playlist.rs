use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::format::Channel;

/// Structured form of one m3u playlist. Order of `channels` is the order
/// of `#EXTINF` occurrences in the source text and determines display
/// sequence on playback; duplicate entries are legal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist-level EPG url from the `url-tvg` header attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvg_url: Option<SmolStr>,
    /// Channels of this playlist
    #[serde(default)]
    pub channels: Vec<Channel>,
}

impl Playlist {
    /// Serialize back to m3u text. Lines are joined with a single `\n`
    /// and no trailing newline is appended.
    pub fn to_m3u(&self) -> String {
        self.to_string()
    }
}
