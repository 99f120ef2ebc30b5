use serde_json::Value;

/// Displays a game state. `None` means the server's answer carried no
/// `game_state` at all; what to draw then is up to the renderer.
pub trait Renderer {
    fn render(&self, game_state: Option<&Value>);
}

impl<F> Renderer for F
where
    F: Fn(Option<&Value>),
{
    fn render(&self, game_state: Option<&Value>) {
        self(game_state)
    }
}
