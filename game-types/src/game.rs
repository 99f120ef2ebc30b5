use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::UserId;

/// Server-issued game identifier, used verbatim as the last path segment of
/// `/api/game/{game_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Body of `POST /api/create_game`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGameRequest {
    pub user_id: UserId,
}

/// Whatever the game server answered, parsed as JSON and otherwise untouched.
///
/// Error payloads sent with a non-success status end up here too; callers
/// that care have to look at the shape themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameRepresentation(Value);

impl GameRepresentation {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The nested state consumed by the renderer, if the payload has one
    pub fn game_state(&self) -> Option<&Value> {
        self.0.get("game_state")
    }

    pub fn game_id(&self) -> Option<&str> {
        self.0.get("game_id").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for GameRepresentation {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
