use super::snapshot::UsedWordsSnapshot;
use super::UsedWordStore;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// Used words persisted as a JSON file so they survive restarts.
///
/// Read and write failures are logged and treated as an empty list; a broken
/// file never stops a round from being dealt.
pub struct JsonFileWordStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

impl JsonFileWordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_words(&self) -> Vec<String> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Failed to read used words: {}", e);
                return Vec::new();
            }
        };

        let snapshot: UsedWordsSnapshot = match serde_json::from_str(&json) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Failed to parse used words: {}", e);
                return Vec::new();
            }
        };

        if let Err(e) = snapshot.validate() {
            tracing::warn!(path = %self.path.display(), "Ignoring used words file: {}", e);
            return Vec::new();
        }

        snapshot.words
    }

    async fn write_words(&self, words: Vec<String>) {
        if let Err(e) = self.try_write_words(words).await {
            tracing::warn!(path = %self.path.display(), "Failed to save used words: {}", e);
        }
    }

    /// Write to a sibling temp file and rename so readers never see half a file
    async fn try_write_words(&self, words: Vec<String>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&UsedWordsSnapshot::new(words))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await
    }
}

#[async_trait]
impl UsedWordStore for JsonFileWordStore {
    async fn get_used_words(&self) -> Vec<String> {
        self.read_words().await
    }

    async fn add_used_word(&self, word: &str) {
        let _guard = self.write_lock.lock().await;
        let mut words = self.read_words().await;
        if !words.iter().any(|w| w == word) {
            words.push(word.to_string());
            self.write_words(words).await;
        }
    }

    async fn clear_used_words(&self) {
        let _guard = self.write_lock.lock().await;
        self.write_words(Vec::new()).await;
        tracing::info!(path = %self.path.display(), "Used words cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::snapshot::USED_WORDS_SCHEMA_VERSION;

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileWordStore::new(dir.path().join("used.json"));
        assert!(store.get_used_words().await.is_empty());
    }

    #[tokio::test]
    async fn test_words_survive_new_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("used.json");

        let store = JsonFileWordStore::new(&path);
        store.add_used_word("Musa").await;
        store.add_used_word("Isa").await;
        store.add_used_word("Musa").await;

        let reopened = JsonFileWordStore::new(&path);
        assert_eq!(reopened.get_used_words().await, vec!["Musa", "Isa"]);
    }

    #[tokio::test]
    async fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileWordStore::new(dir.path().join("used.json"));
        store.add_used_word("Nuh").await;
        store.clear_used_words().await;
        assert!(store.get_used_words().await.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("used.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let store = JsonFileWordStore::new(&path);
        assert!(store.get_used_words().await.is_empty());

        // A write replaces the broken file
        store.add_used_word("Yusuf").await;
        assert_eq!(store.get_used_words().await, vec!["Yusuf"]);
    }

    #[tokio::test]
    async fn test_unwritable_path_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("used.json");
        tokio::fs::create_dir(&path).await.unwrap();

        let store = JsonFileWordStore::new(&path);
        store.add_used_word("Musa").await;
        store.clear_used_words().await;
        assert!(store.get_used_words().await.is_empty());
        assert!(path.is_dir());
    }

    #[tokio::test]
    async fn test_newer_schema_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("used.json");
        let json = format!(
            r#"{{"schema_version": {}, "updated_at": "2026-01-01T00:00:00Z", "words": ["Adam"]}}"#,
            USED_WORDS_SCHEMA_VERSION + 1
        );
        tokio::fs::write(&path, json).await.unwrap();

        let store = JsonFileWordStore::new(&path);
        assert!(store.get_used_words().await.is_empty());
    }
}
