//! Tick Scheduling
//!
//! The engine asks for "wake me after d" one tick at a time. This keeps that
//! single deadline and turns it into a future the event loop can select on.

use std::time::Duration;

use pipes_engine::Command;
use tokio::time::Instant;

/// One-shot frame timer
#[derive(Debug, Default)]
pub struct TickScheduler {
    deadline: Option<Instant>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer `after` from now, replacing any earlier deadline
    pub fn schedule(&mut self, after: Duration) {
        self.deadline = Some(Instant::now() + after);
    }

    /// Arm the timer if the command asks for a tick
    ///
    /// Returns `false` when the command is [`Command::Quit`].
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Tick(after) => {
                self.schedule(after);
                true
            }
            Command::None => true,
            Command::Quit => {
                self.deadline = None;
                false
            }
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.deadline.is_some()
    }

    /// Resolve at the deadline and disarm; never resolves while unarmed
    ///
    /// Cancel safe: dropping the future before it resolves keeps the deadline.
    pub async fn wait(&mut self) {
        match self.deadline {
            Some(deadline) => {
                tokio::time::sleep_until(deadline).await;
                self.deadline = None;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
