use clap::Parser;

use game_types::GameId;

/// Client for the card game server.
///
/// Without arguments, reads login notifications from stdin (one JSON user
/// object per line, e.g. `{"id": "u1"}`), creates a game for each user and
/// prints its game state. The server is taken from GAME_SERVER_URL.
#[derive(Debug, Parser)]
#[command(name = "game-client", version)]
pub struct GameClientCli {
    /// Print the current representation of this game and exit
    pub game_id: Option<String>,
}

impl GameClientCli {
    pub fn game_id(&self) -> Option<GameId> {
        self.game_id.clone().map(GameId::new)
    }
}
