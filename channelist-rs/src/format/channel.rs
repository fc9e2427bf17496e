use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::format::directives;

/// One playlist entry: an `#EXTINF` directive line plus the stream URL
/// on the line below it.
///
/// Absent attributes are `None`, never an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Display name, the text after the comma on the `#EXTINF` line
    #[serde(default)]
    pub name: SmolStr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvg_id: Option<SmolStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvg_name: Option<SmolStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvg_logo: Option<SmolStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_title: Option<SmolStr>,
    /// Stream address; empty when the source omitted the URL line
    #[serde(default)]
    pub url: SmolStr,
    /// Copy of the playlist-level EPG url. Not a per-channel field in the
    /// m3u format itself, only attached for editing convenience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvg_url: Option<SmolStr>,
}

impl Default for Channel {
    fn default() -> Self {
        Self {
            name: SmolStr::new(directives::UNKNOWN_NAME),
            tvg_id: None,
            tvg_name: None,
            tvg_logo: None,
            group_title: None,
            url: SmolStr::default(),
            tvg_url: None,
        }
    }
}
