use std::path::PathBuf;

pub const DEFAULT_MIN_PLAYERS: usize = 3;
pub const DEFAULT_MAX_PLAYERS: usize = 20;
pub const DEFAULT_PLAYERS: usize = 4;

/// Session configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Smallest group a round can be dealt for
    pub min_players: usize,
    /// Largest group a round can be dealt for
    pub max_players: usize,
    /// Group size the dealer binary deals for
    pub default_players: usize,
    /// JSON file for used words (in-memory when unset)
    pub used_words_path: Option<PathBuf>,
    /// JSON catalog replacing the built-in categories
    pub catalog_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_players: DEFAULT_MIN_PLAYERS,
            max_players: DEFAULT_MAX_PLAYERS,
            default_players: DEFAULT_PLAYERS,
            used_words_path: None,
            catalog_path: None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

impl SessionConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut min_players = non_empty_var("IMPOSTER_MIN_PLAYERS")
            .and_then(|v| v.parse().ok())
            .filter(|&n: &usize| n >= 2)
            .unwrap_or(DEFAULT_MIN_PLAYERS);

        let max_players = non_empty_var("IMPOSTER_MAX_PLAYERS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_PLAYERS);

        if max_players < min_players {
            tracing::warn!(
                min_players,
                max_players,
                "IMPOSTER_MAX_PLAYERS below minimum, using default minimum"
            );
            min_players = DEFAULT_MIN_PLAYERS.min(max_players).max(2);
        }

        let max_players = max_players.max(min_players);

        let default_players = non_empty_var("IMPOSTER_PLAYERS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PLAYERS);

        let used_words_path = non_empty_var("IMPOSTER_USED_WORDS_PATH").map(PathBuf::from);
        let catalog_path = non_empty_var("IMPOSTER_CATALOG_PATH").map(PathBuf::from);

        tracing::info!(
            min_players,
            max_players,
            default_players,
            persisted_words = used_words_path.is_some(),
            custom_catalog = catalog_path.is_some(),
            "Session config loaded"
        );

        Self {
            min_players,
            max_players,
            default_players,
            used_words_path,
            catalog_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "IMPOSTER_MIN_PLAYERS",
        "IMPOSTER_MAX_PLAYERS",
        "IMPOSTER_PLAYERS",
        "IMPOSTER_USED_WORDS_PATH",
        "IMPOSTER_CATALOG_PATH",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.min_players, 3);
        assert_eq!(config.max_players, 20);
        assert_eq!(config.default_players, 4);
        assert!(config.used_words_path.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        assert_eq!(SessionConfig::from_env(), SessionConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_values() {
        clear_env();
        std::env::set_var("IMPOSTER_MIN_PLAYERS", "4");
        std::env::set_var("IMPOSTER_MAX_PLAYERS", "12");
        std::env::set_var("IMPOSTER_PLAYERS", " 6 ");
        std::env::set_var("IMPOSTER_USED_WORDS_PATH", "/tmp/used.json");
        std::env::set_var("IMPOSTER_CATALOG_PATH", "  ");

        let config = SessionConfig::from_env();
        assert_eq!(config.min_players, 4);
        assert_eq!(config.max_players, 12);
        assert_eq!(config.default_players, 6);
        assert_eq!(
            config.used_words_path,
            Some(PathBuf::from("/tmp/used.json"))
        );
        assert!(config.catalog_path.is_none());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_values_fall_back() {
        clear_env();
        std::env::set_var("IMPOSTER_MIN_PLAYERS", "one");
        std::env::set_var("IMPOSTER_MAX_PLAYERS", "-3");
        std::env::set_var("IMPOSTER_PLAYERS", "lots");

        let config = SessionConfig::from_env();
        assert_eq!(config.min_players, DEFAULT_MIN_PLAYERS);
        assert_eq!(config.max_players, DEFAULT_MAX_PLAYERS);
        assert_eq!(config.default_players, DEFAULT_PLAYERS);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_max_below_min() {
        clear_env();
        std::env::set_var("IMPOSTER_MIN_PLAYERS", "8");
        std::env::set_var("IMPOSTER_MAX_PLAYERS", "5");

        let config = SessionConfig::from_env();
        assert!(config.min_players <= config.max_players);
        assert_eq!(config.max_players, 5);
        clear_env();
    }
}
