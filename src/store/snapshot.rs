//! On-disk format of the used-word list.

use serde::{Deserialize, Serialize};

/// Schema version for file format compatibility
/// Version 1: flat list of used words
pub const USED_WORDS_SCHEMA_VERSION: u32 = 1;

/// A serializable snapshot of the words already shown as secrets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsedWordsSnapshot {
    /// Schema version for forward compatibility
    pub schema_version: u32,
    /// Last write timestamp (ISO8601)
    pub updated_at: String,
    /// Used words, oldest first
    #[serde(default)]
    pub words: Vec<String>,
}

impl UsedWordsSnapshot {
    /// Create a snapshot stamped with the current time
    pub fn new(words: Vec<String>) -> Self {
        Self {
            schema_version: USED_WORDS_SCHEMA_VERSION,
            updated_at: chrono::Utc::now().to_rfc3339(),
            words,
        }
    }

    /// Validate a snapshot read from disk
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version > USED_WORDS_SCHEMA_VERSION {
            return Err(format!(
                "Used words schema version {} is newer than supported version {}",
                self.schema_version, USED_WORDS_SCHEMA_VERSION
            ));
        }

        if self.words.iter().any(|w| w.trim().is_empty()) {
            return Err("Used words contain an empty entry".to_string());
        }

        Ok(())
    }
}
