//! # channelist-rs
//! A library for parsing and generating IPTV m3u channel playlists
//!
//! # Example
//! ```rust
//! use channelist_rs::Parser;
//! use std::io::Cursor;
//!
//! // 1. Parse
//! let mut parser = Parser::new(Cursor::new(r#"
//! #EXTM3U url-tvg="http://epg.example/guide.xml"
//! #EXTINF:-1 tvg-id="cnn" group-title="News", CNN
//! http://stream.example/cnn"#));
//! parser.parse().unwrap();
//! let playlist = parser.into_playlist();
//! // Do your works with playlist...
//!
//! // 2. Generate
//! println!("{}", playlist.to_m3u());
//! ```

mod builder;
pub mod format;
mod parser;
pub use parser::*;
