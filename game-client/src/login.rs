use futures_util::{Stream, TryStreamExt};

use game_types::AuthenticatedUser;

use crate::api::GameApi;
use crate::error::ClientError;
use crate::render::Renderer;

/// Bootstraps a game for a freshly logged-in user and shows it.
///
/// The renderer runs only once the create request has resolved. If it fails
/// the error is returned untouched and nothing is rendered.
pub async fn on_login<A, R>(
    user: &AuthenticatedUser,
    api: &A,
    renderer: &R,
) -> Result<(), ClientError>
where
    A: GameApi + ?Sized,
    R: Renderer + ?Sized,
{
    tracing::info!("User {} logged in, creating game", user.id);

    let game = api.create_game(user.id.clone()).await?;

    if game.game_state().is_none() {
        tracing::warn!("Game created for user {} has no game_state", user.id);
    }
    renderer.render(game.game_state());

    Ok(())
}

/// Runs [`on_login`] for every login notification, one after the other.
///
/// Returns when the provider closes the stream, or with the first error, be it
/// a failed notification or a failed login.
pub async fn listen_for_logins<S, A, R>(
    logins: S,
    api: &A,
    renderer: &R,
) -> Result<(), ClientError>
where
    S: Stream<Item = Result<AuthenticatedUser, ClientError>>,
    A: GameApi + ?Sized,
    R: Renderer + ?Sized,
{
    futures_util::pin_mut!(logins);

    while let Some(user) = logins.try_next().await? {
        on_login(&user, api, renderer).await?;
    }

    tracing::debug!("Login notifications closed");
    Ok(())
}
