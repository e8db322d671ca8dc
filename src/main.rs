use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imposter::{
    config::SessionConfig,
    engine::{generate_player_names, voting_time_seconds},
    state::{GameSession, RoundRequest},
};

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imposter=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SessionConfig::from_env();
    let num_players = config.default_players;
    let session = match GameSession::from_config(config).await {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Failed to load catalog: {}", e);
            std::process::exit(1);
        }
    };

    let request =
        RoundRequest::new(num_players, 1).with_player_names(generate_player_names(num_players));

    let round = match session.start_round(request).await {
        Ok(round) => round,
        Err(e) => {
            tracing::error!("Could not deal a round: {}", e);
            std::process::exit(1);
        }
    };

    for card in round.cards() {
        tracing::info!(
            player = %card.player_name,
            imposter = card.is_imposter,
            category = card.category_name.as_deref().unwrap_or("???"),
            word = card.secret_word.as_deref().unwrap_or("???"),
            "Card"
        );
    }

    tracing::info!(
        seconds = voting_time_seconds(round.settings.num_players),
        "Voting timer"
    );
}
