use std::{
    error::Error,
    fmt::Display,
    io::{self, BufRead, Cursor},
    mem,
};

use lazy_static::lazy_static;
use regex::Regex;
use smol_str::SmolStr;

use crate::format::{Channel, Playlist, directives};

#[derive(Debug)]
pub enum ParseError {
    IoError(io::Error),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::IoError(e) => e.fmt(f),
        }
    }
}
impl Error for ParseError {}
impl From<io::Error> for ParseError {
    fn from(value: io::Error) -> Self {
        Self::IoError(value)
    }
}

lazy_static! {
    /// `key="value"` with optional quotes; a bare value runs to the next
    /// whitespace, comma or quote.
    static ref ATTRIBUTE_REGEX: Regex =
        Regex::new(r#"([A-Za-z0-9-]+)=(?:"([^"]*)"|([^"\s,]+))"#).expect("Regular expression error");
}

/// Either side of a stream URL: a pending channel is open from its
/// `#EXTINF` line until the line below it is consumed.
enum State {
    AwaitDirective,
    AwaitUrl(Channel),
}

/// Streaming m3u parser.
///
/// Malformed playlist text never fails the parse: entries missing a URL,
/// a name or any attribute degrade into partial channels. The only error
/// source is the underlying reader.
pub struct Parser<T: BufRead> {
    reader: T,
    buffer: String,
    playlist: Playlist,
    state: State,
}

impl<T: BufRead> Parser<T> {
    pub fn new(reader: T) -> Self {
        Self {
            reader,
            buffer: String::new(),
            playlist: Playlist::default(),
            state: State::AwaitDirective,
        }
    }

    pub fn parse(&mut self) -> Result<(), ParseError> {
        let Some(first_line) = self.next_line()? else {
            return Ok(());
        };

        if first_line.starts_with(directives::EXTM3U) {
            self.parse_header(&first_line);
        } else {
            self.process_line(&first_line);
        }

        while let Some(line) = self.next_line()? {
            self.process_line(&line);
        }

        // an #EXTINF at the end of input still yields a channel
        self.finish_pending();

        Ok(())
    }

    pub fn into_playlist(self) -> Playlist {
        self.playlist
    }

    fn next_line(&mut self) -> Result<Option<String>, io::Error> {
        loop {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => return Ok(None),
                Ok(_) => {}
                Err(e) => return Err(e),
            }

            if self.buffer.trim().len() != 0 {
                return Ok(Some(self.buffer.trim().to_owned()));
            }
        }
    }

    fn parse_header(&mut self, line: &str) {
        for captures in ATTRIBUTE_REGEX.captures_iter(&line[directives::EXTM3U_LEN..]) {
            if &captures[1] != directives::TVG_URL {
                continue;
            }

            // the header attribute only counts when double-quoted
            let Some(value) = captures.get(2) else {
                continue;
            };
            self.playlist.tvg_url = Some(SmolStr::new(value.as_str()));
            break;
        }
    }

    fn process_line(&mut self, line: &str) {
        if line.starts_with('#') {
            // a directive is never a stream URL, close any open entry
            self.finish_pending();
            if line.starts_with(directives::EXTINF) {
                let channel = self.parse_extinf(line);
                self.state = State::AwaitUrl(channel);
            }
        } else if let State::AwaitUrl(mut channel) =
            mem::replace(&mut self.state, State::AwaitDirective)
        {
            channel.url = SmolStr::new(line);
            self.playlist.channels.push(channel);
        }
        // a bare line with no #EXTINF directly above it is ignored
    }

    fn finish_pending(&mut self) {
        if let State::AwaitUrl(channel) = mem::replace(&mut self.state, State::AwaitDirective) {
            self.playlist.channels.push(channel);
        }
    }

    /// Single pass over the `#EXTINF` line: every `key="value"` pair is
    /// inspected once, recognized attributes are stripped, and the display
    /// name is what follows the first comma of the residue. A comma inside
    /// a quoted attribute value therefore does not cut the name short, and
    /// attribute-shaped text after the name comma stays part of the name.
    fn parse_extinf(&mut self, line: &str) -> Channel {
        let mut channel = Channel {
            name: SmolStr::default(),
            url: SmolStr::default(),
            tvg_url: self.playlist.tvg_url.clone(),
            ..Default::default()
        };
        let mut residue = String::new();
        let mut residue_from = 0;

        for captures in ATTRIBUTE_REGEX.captures_iter(line) {
            let slot = match &captures[1] {
                directives::TVG_ID => &mut channel.tvg_id,
                directives::TVG_NAME => &mut channel.tvg_name,
                directives::TVG_LOGO => &mut channel.tvg_logo,
                directives::GROUP_TITLE => &mut channel.group_title,
                _ => continue,
            };

            let value = captures
                .get(2)
                .or_else(|| captures.get(3))
                .map(|m| m.as_str())
                .unwrap_or_default();
            *slot = Some(value.into());

            if let Some(whole) = captures.get(0) {
                residue.push_str(&line[residue_from..whole.start()]);
                residue_from = whole.end();
            }
        }
        residue.push_str(&line[residue_from..]);

        channel.name = match residue.find(',') {
            Some(comma) => SmolStr::new(residue[comma + 1..].trim()),
            None => SmolStr::new(directives::UNKNOWN_NAME),
        };

        channel
    }
}

/// Parse in-memory playlist text.
///
/// Malformed content degrades into partial or empty-field channels, so
/// unlike [`Parser::parse`] this cannot fail.
pub fn parse_str(content: &str) -> Playlist {
    let mut parser = Parser::new(Cursor::new(content));
    parser
        .parse()
        .expect("reading from an in-memory buffer cannot fail");
    parser.into_playlist()
}
