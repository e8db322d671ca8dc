//! Role assignment
//!
//! Splits a roster into imposters, an optional double agent and normal
//! players. The previous round's imposters can be excluded so that
//! "Play Again" doesn't hand the same people the same role when someone
//! else could take it.

use crate::types::{player_id, Player, PlayerId, Role};
use rand::seq::{IndexedRandom, SliceRandom};
use std::collections::HashSet;

/// Default display names: "Player 1" ... "Player n"
pub fn generate_player_names(count: usize) -> Vec<String> {
    (1..=count).map(|n| format!("Player {}", n)).collect()
}

/// Create the roster for a round with freshly drawn roles.
///
/// Imposters are drawn uniformly from the players whose ids are not in
/// `exclude_imposter_ids`, as long as enough of them remain to fill every
/// imposter slot. Otherwise the draw is unconstrained.
///
/// The player matching `starting_player_id` is moved to the front; all
/// other players keep their positional order.
pub fn create_players(
    num_players: usize,
    num_imposters: usize,
    has_double_agent: bool,
    starting_player_id: &str,
    player_names: &[String],
    exclude_imposter_ids: &[PlayerId],
) -> Vec<Player> {
    let mut rng = rand::rng();

    // At least one player must be left who knows the word
    let num_imposters = num_imposters.min(num_players.saturating_sub(1));

    let mut indices: Vec<usize> = (0..num_players).collect();
    indices.shuffle(&mut rng);

    let excluded: HashSet<&str> = exclude_imposter_ids.iter().map(String::as_str).collect();

    // Filtering a shuffled list keeps it uniformly shuffled
    let eligible: Vec<usize> = indices
        .iter()
        .copied()
        .filter(|&i| !excluded.contains(player_id(i).as_str()))
        .collect();

    let imposters: HashSet<usize> =
        if !excluded.is_empty() && !eligible.is_empty() && eligible.len() >= num_imposters {
            eligible.iter().take(num_imposters).copied().collect()
        } else {
            if !excluded.is_empty() {
                tracing::debug!(
                    eligible = eligible.len(),
                    num_imposters,
                    "Not enough non-excluded players, drawing imposters from everyone"
                );
            }
            indices.iter().take(num_imposters).copied().collect()
        };

    let remaining: Vec<usize> = indices
        .iter()
        .copied()
        .filter(|i| !imposters.contains(i))
        .collect();

    let double_agent = if has_double_agent {
        remaining.choose(&mut rng).copied()
    } else {
        None
    };

    let mut players: Vec<Player> = (0..num_players)
        .map(|i| {
            let role = if imposters.contains(&i) {
                Role::Imposter
            } else if double_agent == Some(i) {
                Role::DoubleAgent
            } else {
                Role::Normal
            };

            Player {
                id: player_id(i),
                name: player_names
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| format!("Player {}", i + 1)),
                role,
                has_seen_card: false,
                quiz_answer: None,
            }
        })
        .collect();

    if let Some(pos) = players.iter().position(|p| p.id == starting_player_id) {
        let starter = players.remove(pos);
        players.insert(0, starter);
    }

    players
}

/// Pick who gets the device first, avoiding `previous` when there is anyone else
pub fn select_starting_player(num_players: usize, previous: Option<&str>) -> Option<PlayerId> {
    let all: Vec<PlayerId> = (0..num_players).map(player_id).collect();
    let others: Vec<&PlayerId> = all
        .iter()
        .filter(|id| Some(id.as_str()) != previous)
        .collect();

    let mut rng = rand::rng();
    if others.is_empty() {
        all.choose(&mut rng).cloned()
    } else {
        others.choose(&mut rng).map(|id| (*id).clone())
    }
}
