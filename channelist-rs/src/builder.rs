use std::fmt::Display;

use crate::format::{Channel, Playlist, directives};

impl Display for Playlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // header
        write!(f, "{}", directives::EXTM3U)?;
        if let Some(tvg_url) = self.tvg_url.as_ref().filter(|x| !x.is_empty()) {
            write!(f, " {}=\"{}\"", directives::TVG_URL, tvg_url)?;
        }

        // channels
        for it in self.channels.iter() {
            write!(f, "\n{}", it)?;
        }

        Ok(())
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // #EXTINF:-1 attributes..., name
        write!(f, "{}-1", directives::EXTINF)?;

        let attributes = [
            (directives::TVG_ID, &self.tvg_id),
            (directives::TVG_NAME, &self.tvg_name),
            (directives::TVG_LOGO, &self.tvg_logo),
            (directives::GROUP_TITLE, &self.group_title),
        ];
        for (key, value) in attributes {
            if let Some(value) = value.as_ref().filter(|x| !x.is_empty()) {
                write!(f, " {}=\"{}\"", key, value)?;
            }
        }

        // the URL line may be blank when the source entry had no URL
        write!(f, ", {}\n{}", self.name, self.url)
    }
}
