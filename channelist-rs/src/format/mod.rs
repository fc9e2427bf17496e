mod channel;
mod playlist;

pub use channel::*;
pub use playlist::*;

pub mod directives {
    pub const EXTM3U: &str = "#EXTM3U";
    pub const EXTM3U_LEN: usize = EXTM3U.len();
    pub const EXTINF: &str = "#EXTINF:";

    pub const TVG_URL: &str = "url-tvg";
    pub const TVG_ID: &str = "tvg-id";
    pub const TVG_NAME: &str = "tvg-name";
    pub const TVG_LOGO: &str = "tvg-logo";
    pub const GROUP_TITLE: &str = "group-title";

    /// Display name used when an `#EXTINF` line carries no `,name` part.
    pub const UNKNOWN_NAME: &str = "Unknown";
}
