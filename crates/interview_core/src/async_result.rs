/// Outcome of one asynchronous operation as seen by a screen.
///
/// A run starts as `Loading` and settles exactly once into `Success` or
/// `Error`. Re-running an operation produces a fresh value; settled values
/// are never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncResult<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> AsyncResult<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, AsyncResult::Loading)
    }

    /// `true` for `Success` and `Error`.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            AsyncResult::Success(value) => Some(value),
            AsyncResult::Loading | AsyncResult::Error(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            AsyncResult::Error(message) => Some(message),
            AsyncResult::Loading | AsyncResult::Success(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AsyncResult<U> {
        match self {
            AsyncResult::Loading => AsyncResult::Loading,
            AsyncResult::Success(value) => AsyncResult::Success(f(value)),
            AsyncResult::Error(message) => AsyncResult::Error(message),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for AsyncResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => AsyncResult::Success(value),
            Err(err) => {
                let message = err.to_string();
                if message.is_empty() {
                    AsyncResult::Error("Unknown Error".to_string())
                } else {
                    AsyncResult::Error(message)
                }
            }
        }
    }
}
