use std::sync::{mpsc, Arc};

use interview_core::{AsyncResult, ProfileStore, SkillsView, UploadOutcome};
use interview_logging::client_info;
use tokio::task::JoinHandle;

use crate::runner::Commit;
use crate::{
    OperationRunner, PipelineEvent, ProgressSink, ResumeSource, Stage, UploadPipeline,
};

/// Turns the pipeline's committed stage into a published `Loading`.
struct CommitOnStage(Commit<UploadOutcome>);

impl ProgressSink for CommitOnStage {
    fn emit(&self, event: PipelineEvent) {
        if event == PipelineEvent::StageStarted(Stage::Committed) {
            self.0.commit();
        }
    }
}

/// Upload screen controller.
///
/// Fast pre-flight failures are published as `Error` without a preceding
/// `Loading`. Concurrent uploads are not prevented; hosts that want a single
/// attempt at a time should disable retry while [`is_loading`](Self::is_loading).
pub struct UploadController {
    pipeline: UploadPipeline,
    runner: OperationRunner<UploadOutcome>,
    profile: ProfileStore,
}

impl UploadController {
    pub fn new(pipeline: UploadPipeline, profile: ProfileStore) -> Self {
        Self {
            pipeline,
            runner: OperationRunner::new(),
            profile,
        }
    }

    pub fn subscribe(&self) -> mpsc::Receiver<AsyncResult<UploadOutcome>> {
        self.runner.subscribe()
    }

    pub fn current(&self) -> Option<AsyncResult<UploadOutcome>> {
        self.runner.current()
    }

    pub fn is_loading(&self) -> bool {
        self.runner.is_loading()
    }

    /// Skills of the last successful upload, if the current state is a success.
    pub fn skills_view(&self) -> Option<SkillsView> {
        match self.runner.current()? {
            AsyncResult::Success(outcome) => Some(SkillsView::from_outcome(&outcome)),
            AsyncResult::Loading | AsyncResult::Error(_) => None,
        }
    }

    pub async fn upload(&self, source: &dyn ResumeSource) -> AsyncResult<UploadOutcome> {
        let pipeline = &self.pipeline;
        let profile = &self.profile;
        self.runner
            .run_deferred(|commit| async move {
                let sink = CommitOnStage(commit);
                let outcome = pipeline.submit(source, &sink).await?;
                if profile.record_resume(&outcome) {
                    client_info!("Resume recorded on the signed-in profile");
                }
                Ok::<_, interview_core::UploadFailure>(outcome)
            })
            .await
    }

    /// Runs [`upload`](Self::upload) on the current runtime.
    pub fn launch(
        self: &Arc<Self>,
        source: Arc<dyn ResumeSource>,
    ) -> JoinHandle<AsyncResult<UploadOutcome>> {
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.upload(source.as_ref()).await })
    }
}
