use game_types::GameId;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid game server URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },
    #[error("Game id '{0}' cannot be used as a path segment")]
    InvalidGameId(GameId),
    #[error("Request to game server failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Game server response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Failed to read login notifications: {0}")]
    Notifications(#[from] std::io::Error),
}
