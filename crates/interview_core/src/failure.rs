/// Classified reason a resume submission failed. `Display` is the short
/// message shown to the user; server error bodies never end up here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadFailure {
    #[error("Selected file is empty")]
    EmptyFile,
    #[error("Backend not reachable")]
    BackendUnreachable,
    #[error("Network error")]
    NetworkError,
    /// HTTP 422.
    #[error("Invalid file format")]
    InvalidFormat,
    /// HTTP 500.
    #[error("Server error")]
    ServerError,
    #[error("Upload failed (HTTP {0})")]
    OtherHttp(u16),
    #[error("Resume processed but no skills detected")]
    NoSkillsDetected,
    #[error("{0}")]
    Unknown(String),
}

impl UploadFailure {
    /// Classifies a non-2xx upload status.
    pub fn from_status(status: u16) -> Self {
        match status {
            422 => UploadFailure::InvalidFormat,
            500 => UploadFailure::ServerError,
            code => UploadFailure::OtherHttp(code),
        }
    }
}
