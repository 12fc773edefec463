use std::ops::ControlFlow;
use std::sync::{mpsc, Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use interview_core::{update, Effect, InterviewSession, InterviewView, Msg};
use interview_logging::{client_debug, client_trace};
use tokio::runtime::Handle;

use crate::runner::Subscribers;
use crate::{Ticker, TICK_PERIOD};

struct Inner {
    session: InterviewSession,
    ticker: Option<Ticker>,
    subscribers: Subscribers<InterviewView>,
    runtime: Handle,
    period: Duration,
}

/// Interview screen controller: feeds user actions and timer firings through
/// the session state machine and runs the resulting effects.
///
/// Every change is published as a fresh [`InterviewView`]. The ticker is
/// cancelled on `shutdown` and when the controller is dropped.
pub struct InterviewController {
    inner: Arc<Mutex<Inner>>,
}

impl InterviewController {
    /// Timer firings are scheduled on `runtime`.
    pub fn new(session: InterviewSession, runtime: Handle) -> Self {
        Self::with_tick_period(session, runtime, TICK_PERIOD)
    }

    pub fn with_tick_period(session: InterviewSession, runtime: Handle, period: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                session,
                ticker: None,
                subscribers: Subscribers::new(),
                runtime,
                period,
            })),
        }
    }

    pub fn subscribe(&self) -> mpsc::Receiver<InterviewView> {
        lock(&self.inner).subscribers.subscribe()
    }

    pub fn view(&self) -> InterviewView {
        lock(&self.inner).session.view()
    }

    /// Snapshot of the session state.
    pub fn session(&self) -> InterviewSession {
        lock(&self.inner).session.clone()
    }

    pub fn toggle_recording(&self) {
        dispatch(&self.inner, Msg::ToggleRecording);
    }

    pub fn next_question(&self) {
        dispatch(&self.inner, Msg::NextQuestion);
    }

    /// `true` while a ticker task is alive.
    pub fn is_ticking(&self) -> bool {
        lock(&self.inner)
            .ticker
            .as_ref()
            .is_some_and(|ticker| !ticker.is_finished())
    }

    /// Cancels any running ticker. Safe to call repeatedly.
    pub fn shutdown(&self) {
        if let Some(mut ticker) = lock(&self.inner).ticker.take() {
            ticker.cancel();
            client_debug!("Interview ticker cancelled on shutdown");
        }
    }
}

impl Drop for InterviewController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Applies `msg` and runs its effects while holding the lock, so a tick that
/// races with a cancelling message is judged against the updated epoch.
fn dispatch(inner: &Arc<Mutex<Inner>>, msg: Msg) {
    let mut guard = lock(inner);
    let session = std::mem::take(&mut guard.session);
    let (mut session, effects) = update(session, msg);
    let changed = session.consume_dirty();
    let view = session.view();
    guard.session = session;

    for effect in effects {
        match effect {
            Effect::StartTicker { epoch } => {
                if let Some(mut previous) = guard.ticker.take() {
                    previous.cancel();
                }
                let weak = Arc::downgrade(inner);
                let ticker = Ticker::start(&guard.runtime, guard.period, move || {
                    fire(&weak, epoch)
                });
                guard.ticker = Some(ticker);
                client_debug!("Interview ticker started (epoch {})", epoch);
            }
            Effect::StopTicker => {
                if let Some(mut ticker) = guard.ticker.take() {
                    ticker.cancel();
                    client_debug!("Interview ticker stopped");
                }
            }
        }
    }

    if changed {
        guard.subscribers.publish(&view);
    }
}

fn fire(weak: &Weak<Mutex<Inner>>, epoch: interview_core::TickEpoch) -> ControlFlow<()> {
    let Some(inner) = weak.upgrade() else {
        return ControlFlow::Break(());
    };
    client_trace!("Interview tick (epoch {})", epoch);
    dispatch(&inner, Msg::Tick { epoch });
    ControlFlow::Continue(())
}
