use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity issued by the authentication provider. Never parsed or validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The value handed over by the authentication provider once a login completes.
///
/// Only `id` is read; every other field the provider sends (email, metadata,
/// ...) is kept in `profile` and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: UserId,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl AuthenticatedUser {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            profile: Map::new(),
        }
    }
}
