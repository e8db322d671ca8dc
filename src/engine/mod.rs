//! Round-setup engine
//!
//! Pure selection functions: no shared state, the only side effect is the
//! thread-local random number generator. The stateful flow in
//! [`crate::state`] feeds them and records what was used.

pub mod category;
pub mod quiz;
pub mod roles;
pub mod timing;
pub mod words;

pub use category::{select_any, select_excluding, select_single_random};
pub use quiz::{select_decoy, select_question};
pub use roles::{create_players, generate_player_names, select_starting_player};
pub use timing::voting_time_seconds;
pub use words::select_word;
