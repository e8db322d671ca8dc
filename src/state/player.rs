use super::{GameSession, SetupError};
use crate::types::*;

impl GameSession {
    /// Update one player of the current round in place
    async fn update_player<F>(&self, player_id: &str, update: F) -> Result<Player, SetupError>
    where
        F: FnOnce(&mut Player),
    {
        let mut current = self.current_round.write().await;
        let round = current.as_mut().ok_or(SetupError::NoActiveRound)?;

        let player = round
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or_else(|| SetupError::UnknownPlayer(player_id.to_string()))?;

        update(player);
        Ok(player.clone())
    }

    /// Mark a player's card as seen once the device has been handed back
    pub async fn mark_card_seen(&self, player_id: &str) -> Result<Player, SetupError> {
        let player = self
            .update_player(player_id, |p| p.has_seen_card = true)
            .await?;
        tracing::debug!(player_id, "Card seen");
        Ok(player)
    }

    /// Store a player's typed quiz answer, replacing any earlier one
    pub async fn record_quiz_answer(
        &self,
        player_id: &str,
        answer: String,
    ) -> Result<Player, SetupError> {
        let answer = answer.trim().to_string();
        self.update_player(player_id, |p| p.quiz_answer = Some(answer))
            .await
    }

    /// Whether every player has looked at their card
    pub async fn all_cards_seen(&self) -> bool {
        self.current_round
            .read()
            .await
            .as_ref()
            .is_some_and(Round::all_cards_seen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::state::RoundRequest;

    #[tokio::test]
    async fn test_mark_card_seen() {
        let session = GameSession::in_memory(Catalog::builtin());
        let round = session.start_round(RoundRequest::new(3, 1)).await.unwrap();
        assert!(!session.all_cards_seen().await);

        for player in &round.players {
            let updated = session.mark_card_seen(&player.id).await.unwrap();
            assert!(updated.has_seen_card);
        }

        assert!(session.all_cards_seen().await);
    }

    #[tokio::test]
    async fn test_record_quiz_answer() {
        let session = GameSession::in_memory(Catalog::builtin());
        session
            .start_round(RoundRequest::new(3, 1).with_mode(GameMode::Quiz))
            .await
            .unwrap();

        session
            .record_quiz_answer("player-1", " Makkah ".to_string())
            .await
            .unwrap();
        let player = session
            .record_quiz_answer("player-1", "Madinah".to_string())
            .await
            .unwrap();
        assert_eq!(player.quiz_answer.as_deref(), Some("Madinah"));

        let round = session.get_current_round().await.unwrap();
        assert_eq!(
            round.player("player-1").unwrap().quiz_answer.as_deref(),
            Some("Madinah")
        );
    }

    #[tokio::test]
    async fn test_update_errors() {
        let session = GameSession::in_memory(Catalog::builtin());
        assert_eq!(
            session.mark_card_seen("player-0").await.unwrap_err(),
            SetupError::NoActiveRound
        );
        assert!(!session.all_cards_seen().await);

        session.start_round(RoundRequest::new(3, 1)).await.unwrap();
        assert_eq!(
            session.mark_card_seen("player-7").await.unwrap_err(),
            SetupError::UnknownPlayer("player-7".to_string())
        );
    }
}
