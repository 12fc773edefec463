use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex, MutexGuard, PoisonError};

use interview_core::AsyncResult;
use tokio::task::JoinHandle;

/// Fan-out of published values to every live receiver.
pub(crate) struct Subscribers<T> {
    senders: Vec<mpsc::Sender<T>>,
}

impl<T: Clone> Subscribers<T> {
    pub(crate) fn new() -> Self {
        Self {
            senders: Vec::new(),
        }
    }

    pub(crate) fn subscribe(&mut self) -> mpsc::Receiver<T> {
        let (tx, rx) = mpsc::channel();
        self.senders.push(tx);
        rx
    }

    /// Sends once to each receiver; dropped receivers are forgotten.
    pub(crate) fn publish(&mut self, value: &T) {
        self.senders.retain(|tx| tx.send(value.clone()).is_ok());
    }
}

struct Shared<T> {
    current: Option<AsyncResult<T>>,
    subscribers: Subscribers<AsyncResult<T>>,
}

/// Drives one screen operation and publishes its `AsyncResult` transitions.
///
/// Runs are not queued or cancelled: starting a new run while one is pending
/// simply publishes a new `Loading`, and whichever run settles last is what
/// observers see.
pub struct OperationRunner<T> {
    shared: Arc<Mutex<Shared<T>>>,
}

impl<T> Clone for OperationRunner<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Clone + Send + 'static> Default for OperationRunner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> OperationRunner<T> {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                current: None,
                subscribers: Subscribers::new(),
            })),
        }
    }

    /// Receives every state published after this call.
    pub fn subscribe(&self) -> mpsc::Receiver<AsyncResult<T>> {
        self.lock().subscribers.subscribe()
    }

    /// Latest published state; `None` before the first run.
    pub fn current(&self) -> Option<AsyncResult<T>> {
        self.lock().current.clone()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.lock().current, Some(AsyncResult::Loading))
    }

    /// Publishes `Loading`, awaits `producer`, then publishes its outcome.
    pub async fn run<F, E>(&self, producer: F) -> AsyncResult<T>
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.publish(AsyncResult::Loading);
        self.settle(producer.await)
    }

    /// Like [`run`](Self::run) but on the runtime. `Loading` is published
    /// before this returns.
    pub fn launch<F, E>(&self, producer: F) -> JoinHandle<AsyncResult<T>>
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        self.publish(AsyncResult::Loading);
        let runner = self.clone();
        tokio::spawn(async move { runner.settle(producer.await) })
    }

    /// Runs `producer` without publishing `Loading` up front. The producer
    /// decides when work is committed by calling [`Commit::commit`]; failures
    /// before that are published as a bare `Error`.
    pub async fn run_deferred<F, Fut, E>(&self, producer: F) -> AsyncResult<T>
    where
        F: FnOnce(Commit<T>) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let commit = Commit {
            runner: self.clone(),
            committed: Arc::new(AtomicBool::new(false)),
        };
        let result = producer(commit).await;
        self.settle(result)
    }

    fn settle<E: Display>(&self, result: Result<T, E>) -> AsyncResult<T> {
        let state = AsyncResult::from(result);
        self.publish(state.clone());
        state
    }

    fn publish(&self, state: AsyncResult<T>) {
        let mut shared = self.lock();
        shared.subscribers.publish(&state);
        shared.current = Some(state);
    }

    fn lock(&self) -> MutexGuard<'_, Shared<T>> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle given to a deferred producer to announce that work is under way.
pub struct Commit<T> {
    runner: OperationRunner<T>,
    committed: Arc<AtomicBool>,
}

impl<T: Clone + Send + 'static> Commit<T> {
    /// Publishes `Loading`. Only the first call has an effect.
    pub fn commit(&self) {
        if !self.committed.swap(true, Ordering::SeqCst) {
            self.runner.publish(AsyncResult::Loading);
        }
    }

    pub fn is_committed(&self) -> bool {
        self.committed.load(Ordering::SeqCst)
    }
}
