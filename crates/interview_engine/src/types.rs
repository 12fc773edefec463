use std::fmt;

use interview_core::UploadFailure;

/// Ordered stages of a resume submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Local file checks. Nothing is shown to the user yet.
    Diagnostics,
    /// Health probe against the backend.
    Probing,
    /// Pre-flight checks passed; the caller may now show progress.
    Committed,
    Uploading,
    Validating,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    StageStarted(Stage),
    Failed { stage: Stage, failure: UploadFailure },
    Succeeded { skill_count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
    /// Raw error body of a non-2xx response. For logs only.
    pub body: Option<String>,
}

impl TransportError {
    pub(crate) fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            body: None,
        }
    }

    pub(crate) fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Request could not be built (bad URL, bad content type).
    InvalidRequest,
    Network,
    Timeout,
    HttpStatus(u16),
    /// 2xx response whose body is missing or does not decode.
    InvalidBody,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportErrorKind::InvalidRequest => write!(f, "invalid request"),
            TransportErrorKind::Network => write!(f, "network error"),
            TransportErrorKind::Timeout => write!(f, "timeout"),
            TransportErrorKind::HttpStatus(code) => write!(f, "http status {code}"),
            TransportErrorKind::InvalidBody => write!(f, "invalid response body"),
        }
    }
}
