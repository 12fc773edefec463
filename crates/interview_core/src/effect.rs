#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Start a one-second ticker whose firings carry `epoch`.
    StartTicker { epoch: crate::TickEpoch },
    /// Cancel the running ticker, if any.
    StopTicker,
}
