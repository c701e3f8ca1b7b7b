use std::{future::Future, time::Duration};

use tokio::sync::oneshot;

#[derive(Debug, PartialEq, Eq)]
pub enum DrainOutcome<T> {
    Finished(T),
    TimedOut,
}

/// Drive `server` to completion, allowing at most `grace` once `shutdown_started`
/// fires. A server that outlives the deadline is dropped along with its
/// in-flight connections.
pub async fn serve_until_drained<F>(
    server: F,
    shutdown_started: oneshot::Receiver<()>,
    grace: Duration,
) -> DrainOutcome<F::Output>
where
    F: Future,
{
    tokio::pin!(server);

    tokio::select! {
        output = &mut server => DrainOutcome::Finished(output),
        Ok(()) = shutdown_started => {
            match tokio::time::timeout(grace, &mut server).await {
                Ok(output) => DrainOutcome::Finished(output),
                Err(_) => DrainOutcome::TimedOut,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finished_server_is_returned_without_a_signal() {
        let (_tx, rx) = oneshot::channel();
        let outcome = serve_until_drained(async { 7 }, rx, Duration::from_secs(1)).await;
        assert_eq!(outcome, DrainOutcome::Finished(7));
    }

    #[tokio::test]
    async fn stuck_server_is_abandoned_after_the_grace_period() {
        let (tx, rx) = oneshot::channel();
        tx.send(()).expect("receiver alive");

        let outcome = serve_until_drained(
            std::future::pending::<()>(),
            rx,
            Duration::from_millis(20),
        )
        .await;
        assert_eq!(outcome, DrainOutcome::TimedOut);
    }

    #[tokio::test]
    async fn server_draining_within_the_grace_period_finishes() {
        let (tx, rx) = oneshot::channel();
        let server = async move {
            tx.send(()).expect("receiver alive");
            tokio::time::sleep(Duration::from_millis(10)).await;
            "drained"
        };

        let outcome = serve_until_drained(server, rx, Duration::from_secs(5)).await;
        assert_eq!(outcome, DrainOutcome::Finished("drained"));
    }

    #[tokio::test]
    async fn dropped_signal_waits_for_the_server() {
        let (tx, rx) = oneshot::channel::<()>();
        drop(tx);
        let server = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            1
        };

        let outcome = serve_until_drained(server, rx, Duration::from_millis(1)).await;
        assert_eq!(outcome, DrainOutcome::Finished(1));
    }
}
