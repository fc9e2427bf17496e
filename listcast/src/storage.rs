use std::{
    io,
    path::{Path, PathBuf},
};

use rand::Rng;
use tokio::io::AsyncWriteExt;

/// Ids are random, so a fresh one may already be taken; give up after
/// this many tries instead of spinning on an exhausted id space.
const ID_ATTEMPTS: usize = 256;

/// File-backed store of raw m3u text. Only the text is persisted; it is
/// re-parsed on every read, so the structured form never outlives a
/// request.
pub struct PlaylistStore {
    root: PathBuf,
    id_length: usize,
}

impl PlaylistStore {
    pub fn new(root: impl AsRef<Path>, id_length: usize) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            id_length,
        }
    }

    pub async fn init(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    /// Random lowercase id, short enough to share by hand
    pub fn new_id(&self) -> String {
        let mut rng = rand::rng();
        (0..self.id_length)
            .map(|_| (b'a' + rng.random_range(0..26)) as char)
            .collect()
    }

    /// Ids are path components; anything outside `[a-z0-9-]` is rejected
    /// before it reaches the filesystem.
    pub fn is_valid_id(id: &str) -> bool {
        !id.is_empty()
            && id
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.m3u", id))
    }

    /// Store `content` under a fresh id and return it. Create-new
    /// semantics: a generated id that is already taken is retried, never
    /// overwritten.
    pub async fn create(&self, content: &str) -> io::Result<String> {
        for _ in 0..ID_ATTEMPTS {
            let id = self.new_id();
            let file = tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(self.path_for(&id))
                .await;

            match file {
                Ok(mut file) => {
                    file.write_all(content.as_bytes()).await?;
                    file.flush().await?;
                    return Ok(id);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e),
            }
        }

        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "no free playlist id",
        ))
    }

    pub async fn write(&self, id: &str, content: &str) -> io::Result<()> {
        tokio::fs::write(self.path_for(id), content).await
    }

    pub async fn read(&self, id: &str) -> io::Result<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(id)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn exists(&self, id: &str) -> bool {
        tokio::fs::try_exists(self.path_for(id))
            .await
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::PlaylistStore;

    fn temp_store(test: &str, id_length: usize) -> (PathBuf, PlaylistStore) {
        let dir = std::env::temp_dir().join(format!("listcast-{}-{}", test, std::process::id()));
        let store = PlaylistStore::new(&dir, id_length);
        (dir, store)
    }

    #[test]
    fn test_new_id_length_and_charset() {
        let store = PlaylistStore::new("playlists", 5);
        for _ in 0..32 {
            let id = store.new_id();
            assert_eq!(id.len(), 5);
            assert!(id.bytes().all(|b| b.is_ascii_lowercase()));
            assert!(PlaylistStore::is_valid_id(&id));
        }
    }

    #[test]
    fn test_id_validation_rejects_path_tricks() {
        assert!(PlaylistStore::is_valid_id("abcde"));
        assert!(PlaylistStore::is_valid_id("a1-b2"));
        assert!(!PlaylistStore::is_valid_id(""));
        assert!(!PlaylistStore::is_valid_id("../escape"));
        assert!(!PlaylistStore::is_valid_id("UPPER"));
        assert!(!PlaylistStore::is_valid_id("with space"));
        assert!(!PlaylistStore::is_valid_id("dot.m3u"));
    }

    #[tokio::test]
    async fn test_write_read_round_trip() {
        let (dir, store) = temp_store("round-trip", 5);
        store.init().await.unwrap();

        let id = store.new_id();
        assert!(!store.exists(&id).await);
        assert!(store.read(&id).await.unwrap().is_none());

        store.write(&id, "#EXTM3U\n#EXTINF:-1, A\nu1").await.unwrap();
        assert!(store.exists(&id).await);
        assert_eq!(
            store.read(&id).await.unwrap().unwrap(),
            "#EXTM3U\n#EXTINF:-1, A\nu1"
        );

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_never_overwrites_a_taken_id() {
        // single-letter ids: leave "z" as the only free slot
        let (dir, store) = temp_store("create", 1);
        store.init().await.unwrap();
        for taken in b'a'..=b'y' {
            let taken = (taken as char).to_string();
            store.write(&taken, "first user's playlist").await.unwrap();
        }

        let id = store.create("second user's playlist").await.unwrap();
        assert_eq!(id, "z");
        assert_eq!(
            store.read("z").await.unwrap().unwrap(),
            "second user's playlist"
        );
        for taken in b'a'..=b'y' {
            let taken = (taken as char).to_string();
            assert_eq!(
                store.read(&taken).await.unwrap().unwrap(),
                "first user's playlist"
            );
        }

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_fails_when_no_id_is_free() {
        let (dir, store) = temp_store("exhausted", 1);
        store.init().await.unwrap();
        for taken in b'a'..=b'z' {
            let taken = (taken as char).to_string();
            store.write(&taken, "taken").await.unwrap();
        }

        assert!(store.create("late arrival").await.is_err());
        for taken in b'a'..=b'z' {
            let taken = (taken as char).to_string();
            assert_eq!(store.read(&taken).await.unwrap().unwrap(), "taken");
        }

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
