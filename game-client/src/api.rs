use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde_json::Value;

use game_types::{CreateGameRequest, GameId, GameRepresentation, UserId};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// The two requests the game server answers for us.
///
/// Both resolve to the parsed response body whatever the HTTP status was;
/// only transport and JSON decoding failures are errors.
#[async_trait]
pub trait GameApi: Send + Sync {
    /// Starts a new game for `user_id`. Every call creates another game.
    async fn create_game(&self, user_id: UserId) -> Result<GameRepresentation, ClientError>;

    /// Fetches the current representation of an existing game.
    async fn load_game(&self, game_id: &GameId) -> Result<GameRepresentation, ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpGameApi {
    client: Client,
    base_url: Url,
}

impl HttpGameApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.server_url).map_err(|e| {
            tracing::warn!("Rejecting game server URL '{}': {}", config.server_url, e);
            ClientError::InvalidServerUrl {
                url: config.server_url.clone(),
                reason: e.to_string(),
            }
        })?;

        if base_url.cannot_be_a_base() {
            tracing::warn!("Game server URL '{}' cannot carry a path", config.server_url);
            return Err(ClientError::InvalidServerUrl {
                url: config.server_url.clone(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `segments` to the base URL path, percent-encoding each one
    fn endpoint<I>(&self, segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        // Checked in the constructor: the base URL always has a path
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `/api/game/{game_id}`. Dot segments (also percent-encoded ones) are
    /// resolved away by URL parsing, so `.` and `..` cannot address a game.
    fn game_endpoint(&self, game_id: &GameId) -> Result<Url, ClientError> {
        if matches!(game_id.as_str(), "." | "..") {
            tracing::warn!("Refusing to load game with dot-segment id '{}'", game_id);
            return Err(ClientError::InvalidGameId(game_id.clone()));
        }
        Ok(self.endpoint(["api", "game", game_id.as_str()]))
    }
}

#[async_trait]
impl GameApi for HttpGameApi {
    async fn create_game(&self, user_id: UserId) -> Result<GameRepresentation, ClientError> {
        let url = self.endpoint(["api", "create_game"]);
        tracing::debug!("Creating game for user {} via POST {}", user_id, url);

        let response = self
            .client
            .post(url)
            .json(&CreateGameRequest { user_id })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Create game request failed: {:?}", e);
                ClientError::Transport(e)
            })?;

        read_representation(response).await
    }

    async fn load_game(&self, game_id: &GameId) -> Result<GameRepresentation, ClientError> {
        let url = self.game_endpoint(game_id)?;
        tracing::debug!("Loading game {} via GET {}", game_id, url);

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!("Load game request for {} failed: {:?}", game_id, e);
            ClientError::Transport(e)
        })?;

        read_representation(response).await
    }
}

async fn read_representation(response: Response) -> Result<GameRepresentation, ClientError> {
    let status = response.status();
    let url = response.url().clone();

    if status.is_success() {
        tracing::debug!("Game server answered {} for {}", status, url);
    } else {
        // Not an error at this layer, the payload goes back to the caller as-is
        tracing::warn!("Game server answered {} for {}", status, url);
    }

    let body = response.bytes().await.map_err(|e| {
        tracing::warn!("Failed to read response body from {}: {:?}", url, e);
        ClientError::Transport(e)
    })?;

    let value: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("Failed to parse response from {} as JSON: {:?}", url, e);
        ClientError::Decode(e)
    })?;

    Ok(GameRepresentation::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_for(server_url: &str) -> HttpGameApi {
        let config = ClientConfig {
            server_url: server_url.to_string(),
        };
        HttpGameApi::new(&config).unwrap()
    }

    #[test]
    fn test_endpoints_from_bare_host() {
        let api = api_for("http://127.0.0.1:5000");

        assert_eq!(
            api.endpoint(["api", "create_game"]).as_str(),
            "http://127.0.0.1:5000/api/create_game"
        );
        assert_eq!(
            api.endpoint(["api", "game", "g1"]).as_str(),
            "http://127.0.0.1:5000/api/game/g1"
        );
    }

    #[test]
    fn test_endpoints_keep_base_path_prefix() {
        let api = api_for("https://example.com/cards/");
        assert_eq!(
            api.endpoint(["api", "game", "g1"]).as_str(),
            "https://example.com/cards/api/game/g1"
        );
    }

    #[test]
    fn test_game_id_is_a_single_segment() {
        let api = api_for("http://127.0.0.1:5000");
        assert_eq!(
            api.endpoint(["api", "game", "a/b c"]).as_str(),
            "http://127.0.0.1:5000/api/game/a%2Fb%20c"
        );
    }

    #[test]
    fn test_dot_segment_game_ids_are_rejected() {
        let api = api_for("http://127.0.0.1:5000");

        for game_id in [".", ".."] {
            let result = api.game_endpoint(&GameId::from(game_id));
            assert!(matches!(result.unwrap_err(), ClientError::InvalidGameId(_)));
        }

        // Dots inside an id are ordinary characters
        assert_eq!(
            api.game_endpoint(&GameId::from("...")).unwrap().as_str(),
            "http://127.0.0.1:5000/api/game/..."
        );
        assert_eq!(
            api.game_endpoint(&GameId::from("g.1")).unwrap().as_str(),
            "http://127.0.0.1:5000/api/game/g.1"
        );
    }

    #[test]
    fn test_invalid_server_url() {
        let config = ClientConfig {
            server_url: "not a url".to_string(),
        };
        let result = HttpGameApi::new(&config);
        assert!(matches!(
            result.unwrap_err(),
            ClientError::InvalidServerUrl { .. }
        ));
    }

    #[test]
    fn test_cannot_be_a_base_server_url() {
        let config = ClientConfig {
            server_url: "mailto:games@example.com".to_string(),
        };
        let result = HttpGameApi::new(&config);
        assert!(matches!(
            result.unwrap_err(),
            ClientError::InvalidServerUrl { .. }
        ));
    }
}
