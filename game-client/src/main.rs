use std::io::Write;

use clap::Parser;
use serde_json::Value;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use game_client::{
    ClientConfig, ClientError, GameApi, GameClientCli, HttpGameApi, listen_for_logins,
    login_notifications,
};
use game_types::GameId;

#[tokio::main]
async fn main() {
    let cli = GameClientCli::parse();

    // Logs go to stderr so stdout only carries game JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::new();
    let api = match HttpGameApi::new(&config) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("{}", e);
            tracing::error!("Set GAME_SERVER_URL to the base URL of the game server.");
            std::process::exit(1);
        }
    };
    info!("Using game server at {}", api.base_url());

    let result = match cli.game_id() {
        Some(game_id) => load_and_print(&api, game_id).await,
        None => {
            info!("Waiting for login notifications on stdin (one JSON user per line)");
            let logins = login_notifications(BufReader::new(tokio::io::stdin()));
            listen_for_logins(logins, &api, &print_game_state).await
        }
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn load_and_print(api: &HttpGameApi, game_id: GameId) -> Result<(), ClientError> {
    let game = api.load_game(&game_id).await?;
    print_json(game.as_value());
    Ok(())
}

fn print_game_state(game_state: Option<&Value>) {
    print_json(game_state.unwrap_or(&Value::Null));
}

fn print_json(value: &Value) {
    let mut stdout = std::io::stdout().lock();
    // Value serialization cannot fail; only a closed stdout can
    if let Ok(json) = serde_json::to_string_pretty(value) {
        if let Err(e) = writeln!(stdout, "{}", json) {
            tracing::warn!("Failed to write to stdout: {}", e);
        }
    }
}
