//! Interview engine: network transport, resume upload pipeline, operation
//! runner, timer and screen controllers.
mod api;
mod controller;
mod pipeline;
mod runner;
mod settings;
mod source;
mod ticker;
mod transport;
mod types;

pub use api::InterviewApi;
pub use controller::{AnalyticsController, InterviewController, UploadController};
pub use pipeline::{
    classify_transport_error, NoopSink, ProgressSink, UploadPipeline, UPLOAD_CONTENT_TYPE,
    UPLOAD_FILENAME,
};
pub use runner::{Commit, OperationRunner};
pub use settings::{
    SettingsError, TransportSettings, ENV_BASE_URL, ENV_CONNECT_TIMEOUT_SECS,
    ENV_REQUEST_TIMEOUT_SECS,
};
pub use source::{FileSource, MemorySource, ResumeSource, SourceError};
pub use ticker::{Ticker, TICK_PERIOD};
pub use transport::{ReqwestTransport, ResumeTransport};
pub use types::{PipelineEvent, Stage, TransportError, TransportErrorKind};
