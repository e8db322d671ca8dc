use super::{GameSession, SetupError};
use crate::engine::{
    create_players, select_any, select_decoy, select_excluding, select_question,
    select_single_random, select_starting_player, select_word,
};
use crate::store::UsedWordStore;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// What the setup screen asks for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundRequest {
    pub num_players: usize,
    pub num_imposters: usize,
    #[serde(default)]
    pub mode: GameMode,
    #[serde(default)]
    pub special_modes: SpecialModes,
    /// Empty means "surprise me": any eligible category
    #[serde(default)]
    pub selected_categories: Vec<CategoryId>,
    #[serde(default)]
    pub player_names: Vec<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

impl RoundRequest {
    pub fn new(num_players: usize, num_imposters: usize) -> Self {
        Self {
            num_players,
            num_imposters,
            mode: GameMode::Word,
            special_modes: SpecialModes::default(),
            selected_categories: Vec::new(),
            player_names: Vec::new(),
            difficulty: None,
        }
    }

    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CategoryId>,
    {
        self.selected_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_player_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_special_modes(mut self, special_modes: SpecialModes) -> Self {
        self.special_modes = special_modes;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }
}

/// Secret word plus, in quiz mode, the real and decoy questions
type SecretResolution = (String, Option<QuizQuestion>, Option<QuizQuestion>);

impl GameSession {
    /// Deal a fresh round
    pub async fn start_round(&self, request: RoundRequest) -> Result<Round, SetupError> {
        let round = self.deal(&request, None).await?;

        *self.last_request.write().await = Some(request);
        *self.current_round.write().await = Some(round.clone());

        tracing::info!(
            round_id = %round.settings.id,
            players = round.settings.num_players,
            imposters = round.settings.num_imposters,
            mode = ?round.settings.mode,
            category = %round.settings.secret_category,
            "Round started"
        );
        Ok(round)
    }

    /// Re-deal with the same settings, rotating category, imposters and starting player
    pub async fn play_again(&self) -> Result<Round, SetupError> {
        let request = self
            .last_request
            .read()
            .await
            .clone()
            .ok_or(SetupError::NoPreviousRound)?;
        let previous = self
            .get_current_round()
            .await
            .ok_or(SetupError::NoPreviousRound)?;

        let round = self.deal(&request, Some(&previous)).await?;
        *self.current_round.write().await = Some(round.clone());

        tracing::info!(
            round_id = %round.settings.id,
            previous_category = %previous.settings.secret_category,
            category = %round.settings.secret_category,
            "Play again"
        );
        Ok(round)
    }

    fn validate_request(&self, request: &RoundRequest) -> Result<(), SetupError> {
        if request.num_players < self.config.min_players {
            return Err(SetupError::TooFewPlayers {
                min: self.config.min_players,
                got: request.num_players,
            });
        }

        if request.num_players > self.config.max_players {
            return Err(SetupError::TooManyPlayers {
                max: self.config.max_players,
                got: request.num_players,
            });
        }

        if request.num_imposters == 0 || request.num_imposters >= request.num_players {
            return Err(SetupError::InvalidImposterCount {
                imposters: request.num_imposters,
                players: request.num_players,
            });
        }

        Ok(())
    }

    /// Pick the category for this round; on a replay the previous one is avoided
    fn resolve_category(
        &self,
        request: &RoundRequest,
        previous: Option<&Round>,
    ) -> Result<&Category, SetupError> {
        let categories = &self.catalog.categories;

        let category_id = match previous {
            Some(previous) => {
                let pool = if request.selected_categories.is_empty() {
                    self.catalog.eligible_category_ids()
                } else {
                    request.selected_categories.clone()
                };
                Some(select_excluding(
                    &pool,
                    categories,
                    &previous.settings.secret_category,
                ))
            }
            None if request.selected_categories.is_empty() => select_single_random(categories),
            None => select_any(&request.selected_categories, categories),
        };

        category_id
            .as_deref()
            .and_then(|id| self.catalog.category(id))
            .filter(|c| !c.words.is_empty())
            .ok_or(SetupError::NoEligibleCategory)
    }

    async fn resolve_secret(
        &self,
        request: &RoundRequest,
        category: &Category,
    ) -> Result<SecretResolution, SetupError> {
        match request.mode {
            GameMode::Word => {
                let used = self.used_words.get_used_words().await;
                let word =
                    select_word(&category.words, &used).ok_or(SetupError::NoEligibleCategory)?;
                self.used_words.add_used_word(&word).await;
                Ok((word, None, None))
            }
            GameMode::Quiz => {
                let question = {
                    let mut asked = self.session_questions.write().await;
                    let question = select_question(
                        &self.catalog.questions,
                        &category.id,
                        request.difficulty,
                        asked.ids(),
                    )
                    .cloned()
                    .ok_or_else(|| SetupError::QuizExhausted {
                        category_id: category.id.clone(),
                    })?;
                    asked.add(&question.id);
                    question
                };

                let decoy = select_decoy(
                    &self.catalog.questions,
                    &category.id,
                    &question.id,
                    request.difficulty.or(Some(question.difficulty)),
                    &question.answer,
                    &question.question,
                )
                .cloned()
                .unwrap_or_else(|| question.clone());

                Ok((question.answer.clone(), Some(question), Some(decoy)))
            }
        }
    }

    async fn deal(
        &self,
        request: &RoundRequest,
        previous: Option<&Round>,
    ) -> Result<Round, SetupError> {
        self.validate_request(request)?;

        let category = self.resolve_category(request, previous)?;
        let (secret_word, quiz_question, imposter_quiz_question) =
            self.resolve_secret(request, category).await?;

        let previous_starter = previous.map(|p| p.settings.starting_player_id.as_str());
        let starting_player_id = select_starting_player(request.num_players, previous_starter)
            .unwrap_or_else(|| player_id(0));

        let exclude_imposter_ids = previous.map(Round::imposter_ids).unwrap_or_default();

        let players = create_players(
            request.num_players,
            request.num_imposters,
            request.special_modes.double_agent,
            &starting_player_id,
            &request.player_names,
            &exclude_imposter_ids,
        );

        let settings = RoundSettings {
            id: ulid::Ulid::new().to_string(),
            num_players: request.num_players,
            num_imposters: request.num_imposters,
            mode: request.mode,
            special_modes: request.special_modes,
            selected_categories: request.selected_categories.clone(),
            starting_player_id,
            secret_word,
            secret_category: category.id.clone(),
            secret_category_name: category.name.clone(),
            difficulty: request.difficulty,
            quiz_question,
            imposter_quiz_question,
        };

        tracing::debug!(
            round_id = %settings.id,
            starting_player = %settings.starting_player_id,
            excluded_imposters = exclude_imposter_ids.len(),
            "Round dealt"
        );

        Ok(Round { settings, players })
    }
}
