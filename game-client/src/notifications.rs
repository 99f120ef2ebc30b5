use futures_util::{Stream, stream};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use game_types::AuthenticatedUser;

use crate::error::ClientError;

/// Reads login notifications, one JSON user object per line.
///
/// Blank lines are ignored and lines that are not a user object are logged and
/// skipped. The stream ends at EOF, or right after yielding a read error.
pub fn login_notifications<R>(
    reader: R,
) -> impl Stream<Item = Result<AuthenticatedUser, ClientError>>
where
    R: AsyncBufRead + Unpin,
{
    stream::unfold(Some(reader.lines()), |lines| async move {
        let Some(mut lines) = lines else {
            return None;
        };
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => {
                    tracing::warn!("Failed to read login notification: {}", e);
                    return Some((Err(ClientError::Notifications(e)), None));
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<AuthenticatedUser>(&line) {
                Ok(user) => return Some((Ok(user), Some(lines))),
                Err(e) => tracing::warn!("Ignoring malformed login notification: {}", e),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::io;

    use futures_util::StreamExt;
    use tokio::io::BufReader;

    use game_types::UserId;

    use super::*;

    async fn collect_ids(input: &[u8]) -> Vec<UserId> {
        login_notifications(input)
            .map(|user| user.unwrap().id)
            .collect()
            .await
    }

    #[tokio::test]
    async fn test_one_user_per_line() {
        let input = b"{\"id\":\"u1\"}\n{\"id\":\"u2\",\"email\":\"bob@example.com\"}\n";
        assert_eq!(
            collect_ids(input).await,
            vec![UserId::from("u1"), UserId::from("u2")]
        );
    }

    #[tokio::test]
    async fn test_last_line_without_newline() {
        assert_eq!(collect_ids(b"{\"id\":\"u1\"}").await, vec![UserId::from("u1")]);
    }

    #[tokio::test]
    async fn test_blank_and_malformed_lines_are_skipped() {
        let input = b"\n   \n{\"id\":\"u1\"}\nnot json\n\
            {\"email\":\"no-id@example.com\"}\n{\"id\":\"u2\"}\n";
        assert_eq!(
            collect_ids(input).await,
            vec![UserId::from("u1"), UserId::from("u2")]
        );
    }

    #[tokio::test]
    async fn test_empty_input_ends_immediately() {
        assert!(collect_ids(b"").await.is_empty());
    }

    #[tokio::test]
    async fn test_read_error_ends_stream_with_error() {
        let reader = tokio_test::io::Builder::new()
            .read(b"{\"id\":\"u1\"}\n")
            .read_error(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
            .build();

        let items: Vec<_> = login_notifications(BufReader::new(reader)).collect().await;

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_ref().unwrap().id, UserId::from("u1"));
        assert!(matches!(items[1], Err(ClientError::Notifications(_))));
    }
}
