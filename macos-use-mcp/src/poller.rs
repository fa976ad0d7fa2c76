//! Polls a long-running operation until it is done or the request deadline passes.

use macos_use_sdk::proto::{GetOperationRequest, Operation};
use macos_use_sdk::MacosUseClient;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{sleep, timeout_at, Instant};
use tracing::debug;

/// Fixed cadence between `GetOperation` calls.
pub const POLL_TICK: Duration = Duration::from_millis(500);
pub const DEFAULT_WAIT_TIMEOUT_SECS: f64 = 30.0;
pub const DEFAULT_POLL_INTERVAL_SECS: f64 = 0.5;

/// Applies defaults to the caller's wait parameters. Non-positive or
/// missing values fall back to 30s and 0.5s.
pub fn wait_parameters(timeout: Option<f64>, poll_interval: Option<f64>) -> (f64, f64) {
    let timeout = timeout
        .filter(|t| *t > 0.0)
        .unwrap_or(DEFAULT_WAIT_TIMEOUT_SECS);
    let poll_interval = poll_interval
        .filter(|p| *p > 0.0)
        .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);
    (timeout, poll_interval)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Pending,
    Polling,
    Done,
    TimedOut,
    Errored,
}

#[derive(Error, Debug)]
pub enum PollError {
    #[error("timed out waiting for operation {name}")]
    TimedOut { name: String },

    #[error("failed to get operation {name}")]
    Fetch {
        name: String,
        #[source]
        source: tonic::Status,
    },
}

/// Single-flight poller for one operation. Dropping the future returned by
/// [`OperationPoller::run`] stops polling.
pub struct OperationPoller<'a> {
    client: &'a dyn MacosUseClient,
    deadline: Instant,
    state: PollState,
    polls: u32,
}

impl<'a> OperationPoller<'a> {
    pub fn new(client: &'a dyn MacosUseClient, deadline: Instant) -> Self {
        Self {
            client,
            deadline,
            state: PollState::Pending,
            polls: 0,
        }
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    /// Number of `GetOperation` calls issued so far.
    pub fn polls(&self) -> u32 {
        self.polls
    }

    /// Returns the operation once `done` is set. An embedded operation
    /// error is left for the caller to inspect.
    pub async fn run(&mut self, mut operation: Operation) -> Result<Operation, PollError> {
        while !operation.done {
            self.state = PollState::Polling;

            tokio::select! {
                biased;
                _ = tokio::time::sleep_until(self.deadline) => {
                    return Err(self.timed_out(&operation.name));
                }
                _ = sleep(POLL_TICK) => {}
            }

            let request = GetOperationRequest {
                name: operation.name.clone(),
            };
            self.polls += 1;
            operation = match timeout_at(self.deadline, self.client.get_operation(request)).await {
                Ok(Ok(next)) => next,
                Ok(Err(status)) => {
                    self.state = PollState::Errored;
                    return Err(PollError::Fetch {
                        name: operation.name,
                        source: status,
                    });
                }
                Err(_) => return Err(self.timed_out(&operation.name)),
            };
            debug!(
                "Polled operation {} (attempt {}, done={})",
                operation.name, self.polls, operation.done
            );
        }

        self.state = PollState::Done;
        Ok(operation)
    }

    fn timed_out(&mut self, name: &str) -> PollError {
        self.state = PollState::TimedOut;
        PollError::TimedOut {
            name: name.to_string(),
        }
    }
}
