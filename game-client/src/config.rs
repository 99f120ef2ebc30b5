use std::env;

pub const SERVER_URL_VAR: &str = "GAME_SERVER_URL";
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the game server; the `/api/...` routes are resolved against it
    pub server_url: String,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            server_url: env::var(SERVER_URL_VAR)
                .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string()),
        }
    }

    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = server_url.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
