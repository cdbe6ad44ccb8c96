//! Background timer tasks for the screen.
//!
//! Delayed callbacks run as tokio tasks and report back through a channel
//! instead of touching screen state directly:
//! 1. The controller asks [`TaskSpawner`] for a one-shot timer
//! 2. The task sleeps, then sends a [`ScreenMessage`] through the channel
//! 3. The event loop drains the channel with `try_recv()` and handles results
//!
//! Dropping or cancelling the returned [`TimerHandle`] aborts the task, so
//! nothing fires after the screen is torn down.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Messages sent from background tasks to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenMessage {
    /// The welcome overlay auto-dismiss delay has elapsed.
    WelcomeTimerElapsed,
}

/// Spawns timer tasks that report back over a channel.
#[derive(Debug, Clone)]
pub struct TaskSpawner {
    tx: mpsc::UnboundedSender<ScreenMessage>,
}

impl TaskSpawner {
    /// Create a spawner and the receiving end of its channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ScreenMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Send `message` once after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_after(&self, delay: Duration, message: ScreenMessage) -> TimerHandle {
        let tx = self.tx.clone();
        debug!(?message, delay_ms = delay.as_millis() as u64, "Scheduling timer");

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            trace!(?message, "Timer fired");
            // The receiver is gone once the screen shuts down
            let _ = tx.send(message);
        });

        TimerHandle { handle }
    }
}

/// Handle to a scheduled one-shot timer.
#[derive(Debug)]
pub struct TimerHandle {
    handle: JoinHandle<()>,
}

impl TimerHandle {
    /// Cancel the timer. Has no effect if it already fired.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_after_delay() {
        let (spawner, mut rx) = TaskSpawner::new();
        let start = tokio::time::Instant::now();
        let _handle = spawner.spawn_after(
            Duration::from_millis(3000),
            ScreenMessage::WelcomeTimerElapsed,
        );

        let message = rx.recv().await;
        assert_eq!(message, Some(ScreenMessage::WelcomeTimerElapsed));
        assert!(start.elapsed() >= Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_does_not_fire_early() {
        let (spawner, mut rx) = TaskSpawner::new();
        let _handle = spawner.spawn_after(
            Duration::from_millis(3000),
            ScreenMessage::WelcomeTimerElapsed,
        );

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let (spawner, mut rx) = TaskSpawner::new();
        let handle = spawner.spawn_after(
            Duration::from_millis(100),
            ScreenMessage::WelcomeTimerElapsed,
        );
        handle.cancel();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_timer_never_fires() {
        let (spawner, mut rx) = TaskSpawner::new();
        drop(spawner.spawn_after(
            Duration::from_millis(100),
            ScreenMessage::WelcomeTimerElapsed,
        ));

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }
}
