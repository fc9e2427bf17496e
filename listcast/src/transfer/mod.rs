mod playlist_io;

pub use playlist_io::*;
