mod card;
mod player;
mod round;

pub use round::RoundRequest;

use crate::catalog::{Catalog, CatalogError};
use crate::config::SessionConfig;
use crate::store::{JsonFileWordStore, MemoryWordStore, SessionQuestionLog, UsedWordStore};
use crate::types::*;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Errors that stop a round from being dealt
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SetupError {
    #[error("At least {min} players are needed, got {got}")]
    TooFewPlayers { min: usize, got: usize },

    #[error("At most {max} players are supported, got {got}")]
    TooManyPlayers { max: usize, got: usize },

    #[error("{imposters} imposters is not possible with {players} players")]
    InvalidImposterCount { imposters: usize, players: usize },

    #[error("No playable category available")]
    NoEligibleCategory,

    #[error("No unused quiz questions left in category '{category_id}'")]
    QuizExhausted { category_id: CategoryId },

    #[error("No previous round to play again")]
    NoPreviousRound,

    #[error("No round in progress")]
    NoActiveRound,

    #[error("Unknown player '{0}'")]
    UnknownPlayer(PlayerId),
}

/// Shared state of one game session on one device
#[derive(Clone)]
pub struct GameSession {
    pub config: SessionConfig,
    pub catalog: Arc<Catalog>,
    pub used_words: Arc<dyn UsedWordStore>,
    pub session_questions: Arc<RwLock<SessionQuestionLog>>,
    /// Request of the last dealt round, replayed by "Play Again"
    pub last_request: Arc<RwLock<Option<RoundRequest>>>,
    pub current_round: Arc<RwLock<Option<Round>>>,
}

impl GameSession {
    pub fn new(
        config: SessionConfig,
        catalog: Catalog,
        used_words: Arc<dyn UsedWordStore>,
    ) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
            used_words,
            session_questions: Arc::new(RwLock::new(SessionQuestionLog::new())),
            last_request: Arc::new(RwLock::new(None)),
            current_round: Arc::new(RwLock::new(None)),
        }
    }

    /// Session with default config and nothing persisted
    pub fn in_memory(catalog: Catalog) -> Self {
        Self::new(
            SessionConfig::default(),
            catalog,
            Arc::new(MemoryWordStore::new()),
        )
    }

    /// Build a session from config: custom catalog and used-word file when configured
    pub async fn from_config(config: SessionConfig) -> Result<Self, CatalogError> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path).await?,
            None => Catalog::builtin(),
        };

        let used_words: Arc<dyn UsedWordStore> = match &config.used_words_path {
            Some(path) => Arc::new(JsonFileWordStore::new(path)),
            None => Arc::new(MemoryWordStore::new()),
        };

        Ok(Self::new(config, catalog, used_words))
    }

    pub async fn get_current_round(&self) -> Option<Round> {
        self.current_round.read().await.clone()
    }

    pub async fn session_question_ids(&self) -> Vec<QuestionId> {
        self.session_questions.read().await.ids().to_vec()
    }

    /// Forget everything used so far ("New Game")
    pub async fn new_game(&self) {
        self.used_words.clear_used_words().await;
        self.session_questions.write().await.clear();
        self.last_request.write().await.take();
        self.current_round.write().await.take();
        tracing::info!("New game: used words and questions cleared");
    }
}
