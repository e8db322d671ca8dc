use crate::types::*;

impl Round {
    /// The card shown to one player when the device is passed to them.
    ///
    /// Imposters never get the secret word. In blind-imposter mode they lose
    /// the category name as well, and in quiz mode they read the decoy.
    pub fn card_for(&self, player_id: &str) -> Option<Card> {
        let player = self.player(player_id)?;
        let settings = &self.settings;
        let is_imposter = player.is_imposter();

        let category_name = if is_imposter && settings.special_modes.blind_imposter {
            None
        } else {
            Some(settings.secret_category_name.clone())
        };

        let secret_word = (!is_imposter).then(|| settings.secret_word.clone());

        let question = match settings.mode {
            GameMode::Word => None,
            GameMode::Quiz if is_imposter => settings
                .imposter_quiz_question
                .as_ref()
                .or(settings.quiz_question.as_ref())
                .map(|q| q.question.clone()),
            GameMode::Quiz => settings.quiz_question.as_ref().map(|q| q.question.clone()),
        };

        Some(Card {
            player_id: player.id.clone(),
            player_name: player.name.clone(),
            is_imposter,
            is_double_agent: player.role == Role::DoubleAgent,
            category_name,
            secret_word,
            question,
        })
    }

    /// Cards in pass-around order, starting player first
    pub fn cards(&self) -> Vec<Card> {
        self.players
            .iter()
            .filter_map(|p| self.card_for(&p.id))
            .collect()
    }
}
