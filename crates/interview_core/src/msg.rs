#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User pressed the record button.
    ToggleRecording,
    /// User moved on to the next question.
    NextQuestion,
    /// Periodic timer firing, tagged with the epoch of the ticker that sent it.
    Tick { epoch: crate::TickEpoch },
    /// Fallback for placeholder wiring.
    NoOp,
}
