//! Tracking of what has already been used
//!
//! Secret words are remembered across sessions through a [`UsedWordStore`].
//! Quiz question ids only matter for the current session and live in a
//! [`SessionQuestionLog`] owned by the caller.

mod file;
pub mod snapshot;

use async_trait::async_trait;
use tokio::sync::RwLock;

pub use file::JsonFileWordStore;

/// Persistence for words already shown as secrets.
///
/// Implementations swallow their own I/O errors and fall back to an empty
/// list, so reads always succeed.
#[async_trait]
pub trait UsedWordStore: Send + Sync {
    /// All used words, oldest first
    async fn get_used_words(&self) -> Vec<String>;

    /// Remember a word; adding a word twice keeps one entry
    async fn add_used_word(&self, word: &str);

    /// Forget every used word ("New Game")
    async fn clear_used_words(&self);
}

/// Used words kept in memory for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryWordStore {
    words: RwLock<Vec<String>>,
}

impl MemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UsedWordStore for MemoryWordStore {
    async fn get_used_words(&self) -> Vec<String> {
        self.words.read().await.clone()
    }

    async fn add_used_word(&self, word: &str) {
        let mut words = self.words.write().await;
        if !words.iter().any(|w| w == word) {
            words.push(word.to_string());
        }
    }

    async fn clear_used_words(&self) {
        self.words.write().await.clear();
    }
}

/// Quiz question ids asked during the current session
#[derive(Debug, Clone, Default)]
pub struct SessionQuestionLog {
    ids: Vec<String>,
}

impl SessionQuestionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn add(&mut self, id: &str) {
        if !self.contains(id) {
            self.ids.push(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
