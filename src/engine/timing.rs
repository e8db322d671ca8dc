/// Shortest discussion/voting phase
pub const MIN_VOTING_SECONDS: u32 = 60;
/// Longest discussion/voting phase
pub const MAX_VOTING_SECONDS: u32 = 300;
/// Extra time per player beyond the minimum group size of three
const SECONDS_PER_EXTRA_PLAYER: u32 = 15;

/// Voting timer length for a group, growing with the number of players
pub fn voting_time_seconds(num_players: usize) -> u32 {
    let extra_players = u32::try_from(num_players.saturating_sub(3)).unwrap_or(u32::MAX);
    MIN_VOTING_SECONDS
        .saturating_add(extra_players.saturating_mul(SECONDS_PER_EXTRA_PLAYER))
        .min(MAX_VOTING_SECONDS)
}
