use std::ops::ControlFlow;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Period of the interview timer.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Repeating timer with a single owner.
///
/// The first firing happens one `period` after `start`. `cancel` is
/// idempotent and stops the timer before its next scheduled firing. A firing
/// already running on another worker may still finish, so owners that need a
/// strict cut-off tag each firing and drop stale ones. Dropping the ticker
/// cancels it.
pub struct Ticker {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Starts firing `on_tick` every `period` on `runtime` until cancelled or
    /// until the callback breaks.
    pub fn start<F>(runtime: &Handle, period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let handle = runtime.spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => {
                        if cancelled.is_cancelled() || on_tick().is_break() {
                            break;
                        }
                    }
                }
            }
        });
        Self {
            token,
            handle: Some(handle),
        }
    }

    pub fn cancel(&mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// `true` once the timer task has stopped, whatever the reason.
    pub fn is_finished(&self) -> bool {
        self.handle
            .as_ref()
            .map(JoinHandle::is_finished)
            .unwrap_or(true)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
