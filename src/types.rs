use serde::{Deserialize, Serialize};

/// Opaque ID types for readability
pub type PlayerId = String;
pub type CategoryId = String;
pub type QuestionId = String;
pub type RoundId = String;

/// Prefix of the positional player token (`player-0`, `player-1`, ...)
pub const PLAYER_ID_PREFIX: &str = "player-";

/// Build the stable positional id for the player at `index`
pub fn player_id(index: usize) -> PlayerId {
    format!("{}{}", PLAYER_ID_PREFIX, index)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Normal,
    Imposter,
    DoubleAgent,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub role: Role,
    pub has_seen_card: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_answer: Option<String>,
}

impl Player {
    pub fn is_imposter(&self) -> bool {
        self.role == Role::Imposter
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub words: Vec<String>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub is_custom: bool,
}

impl Category {
    /// A category can be drawn at random when it is unlocked (or user-made)
    /// and has at least one word
    pub fn is_eligible(&self) -> bool {
        (!self.locked || self.is_custom) && !self.words.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub category_id: CategoryId,
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Word,
    Quiz,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SpecialModes {
    /// Imposters don't see the category name either
    pub blind_imposter: bool,
    pub double_agent: bool,
}

/// Everything a round needs once setup has resolved category, word and
/// starting player
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundSettings {
    pub id: RoundId,
    pub num_players: usize,
    pub num_imposters: usize,
    pub mode: GameMode,
    pub special_modes: SpecialModes,
    pub selected_categories: Vec<CategoryId>,
    pub starting_player_id: PlayerId,
    pub secret_word: String,
    pub secret_category: CategoryId,
    /// Display name of `secret_category`
    pub secret_category_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_question: Option<QuizQuestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imposter_quiz_question: Option<QuizQuestion>,
}

/// A dealt round: settings plus the roster in pass-around order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub settings: RoundSettings,
    pub players: Vec<Player>,
}

impl Round {
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn imposter_ids(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| p.is_imposter())
            .map(|p| p.id.clone())
            .collect()
    }

    pub fn all_cards_seen(&self) -> bool {
        self.players.iter().all(|p| p.has_seen_card)
    }
}

/// What a player sees when the device is handed to them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub player_id: PlayerId,
    pub player_name: String,
    pub is_imposter: bool,
    pub is_double_agent: bool,
    /// Hidden from imposters in blind-imposter mode
    pub category_name: Option<String>,
    /// Never shown to imposters
    pub secret_word: Option<String>,
    /// Quiz mode only: the real question, or the decoy for imposters
    pub question: Option<String>,
}
