pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod login;
pub mod notifications;
pub mod render;

pub use api::{GameApi, HttpGameApi};
pub use cli::GameClientCli;
pub use config::ClientConfig;
pub use error::ClientError;
pub use login::{listen_for_logins, on_login};
pub use notifications::login_notifications;
pub use render::Renderer;
