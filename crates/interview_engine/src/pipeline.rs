use std::sync::Arc;

use interview_core::{UploadFailure, UploadOutcome};
use interview_logging::{client_debug, client_error, client_info, client_warn};

use crate::{PipelineEvent, ResumeSource, ResumeTransport, Stage, TransportError, TransportErrorKind};

pub const UPLOAD_FILENAME: &str = "resume.pdf";
pub const UPLOAD_CONTENT_TYPE: &str = "application/pdf";

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: PipelineEvent);
}

/// Sink for callers that do not care about progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl ProgressSink for NoopSink {
    fn emit(&self, _event: PipelineEvent) {}
}

/// Guarded resume submission: diagnostics, reachability, upload, validation.
///
/// Each stage runs at most once and only after the previous one succeeded.
/// `Stage::Committed` is reported only once both pre-flight checks passed.
#[derive(Clone)]
pub struct UploadPipeline {
    transport: Arc<dyn ResumeTransport>,
}

impl UploadPipeline {
    pub fn new(transport: Arc<dyn ResumeTransport>) -> Self {
        Self { transport }
    }

    pub async fn submit(
        &self,
        source: &dyn ResumeSource,
        sink: &dyn ProgressSink,
    ) -> Result<UploadOutcome, UploadFailure> {
        let result = self.run_stages(source, sink).await;
        match &result {
            Ok(outcome) => sink.emit(PipelineEvent::Succeeded {
                skill_count: outcome.technical_skills.skill_count(),
            }),
            Err((stage, failure)) => sink.emit(PipelineEvent::Failed {
                stage: *stage,
                failure: failure.clone(),
            }),
        }
        result.map_err(|(_, failure)| failure)
    }

    async fn run_stages(
        &self,
        source: &dyn ResumeSource,
        sink: &dyn ProgressSink,
    ) -> Result<UploadOutcome, (Stage, UploadFailure)> {
        let name = source.display_name();

        sink.emit(PipelineEvent::StageStarted(Stage::Diagnostics));
        match source.byte_len().await {
            Some(0) => {
                client_error!("{} is empty, aborting upload", name);
                return Err((Stage::Diagnostics, UploadFailure::EmptyFile));
            }
            Some(len) => client_debug!("Selected {} ({} bytes)", name, len),
            None => client_warn!("Size of {} is unknown, continuing", name),
        }

        sink.emit(PipelineEvent::StageStarted(Stage::Probing));
        if !self.transport.probe_health().await {
            client_error!("Backend not reachable, aborting upload of {}", name);
            return Err((Stage::Probing, UploadFailure::BackendUnreachable));
        }
        client_debug!("Backend is reachable");

        sink.emit(PipelineEvent::StageStarted(Stage::Committed));

        sink.emit(PipelineEvent::StageStarted(Stage::Uploading));
        let bytes = source.read_all().await.map_err(|err| {
            client_error!("Reading {} failed: {}", name, err);
            (Stage::Uploading, UploadFailure::NetworkError)
        })?;
        let outcome = self
            .transport
            .upload(bytes, UPLOAD_FILENAME, UPLOAD_CONTENT_TYPE)
            .await
            .map_err(|err| (Stage::Uploading, classify_transport_error(err)))?;

        sink.emit(PipelineEvent::StageStarted(Stage::Validating));
        let skill_count = outcome.technical_skills.skill_count();
        client_debug!("Skills count     = {}", skill_count);
        client_debug!("Experience years = {}", outcome.detected_experience_years);
        client_debug!("Questions count  = {}", outcome.generated_questions.len());
        if skill_count == 0 {
            client_warn!("No skills detected in response for {}", name);
            return Err((Stage::Validating, UploadFailure::NoSkillsDetected));
        }

        client_info!("Upload of {} succeeded: skills={:?}", name, outcome.all_skills());
        Ok(outcome)
    }
}

/// Maps a transport error to the user-facing taxonomy. Error bodies are
/// logged here and dropped.
pub fn classify_transport_error(err: TransportError) -> UploadFailure {
    match err.kind {
        TransportErrorKind::Network | TransportErrorKind::Timeout => {
            client_error!("Network error: {}", err.message);
            UploadFailure::NetworkError
        }
        TransportErrorKind::HttpStatus(status) => {
            client_error!(
                "HTTP {} errorBody={}",
                status,
                err.body.as_deref().unwrap_or("(no body)")
            );
            UploadFailure::from_status(status)
        }
        TransportErrorKind::InvalidBody => {
            client_error!("Undecodable response: {}", err.message);
            UploadFailure::Unknown("empty response body".to_string())
        }
        TransportErrorKind::InvalidRequest => {
            client_error!("Upload request rejected locally: {}", err.message);
            UploadFailure::Unknown("Upload failed".to_string())
        }
    }
}
