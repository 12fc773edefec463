use std::sync::Arc;

use interview_core::{
    AnalyticsSummary, AsyncResult, InterviewCreate, InterviewOut, LastFiveEntry,
    QuestionAnswerIn, SkillPracticed,
};

use crate::{InterviewApi, OperationRunner};

/// History and analytics screens. Each data source has its own runner so the
/// screens can render them independently.
pub struct AnalyticsController {
    api: Arc<dyn InterviewApi>,
    pub last_five: OperationRunner<Vec<LastFiveEntry>>,
    pub summary: OperationRunner<AnalyticsSummary>,
    pub skills_practiced: OperationRunner<Vec<SkillPracticed>>,
    pub history: OperationRunner<Vec<InterviewOut>>,
    pub submission: OperationRunner<InterviewOut>,
}

impl AnalyticsController {
    pub fn new(api: Arc<dyn InterviewApi>) -> Self {
        Self {
            api,
            last_five: OperationRunner::new(),
            summary: OperationRunner::new(),
            skills_practiced: OperationRunner::new(),
            history: OperationRunner::new(),
            submission: OperationRunner::new(),
        }
    }

    /// Reloads the dashboard sources concurrently.
    pub async fn refresh(&self) {
        tokio::join!(
            self.last_five.run(self.api.last_five()),
            self.summary.run(self.api.analytics_summary()),
            self.skills_practiced.run(self.api.skills_practiced()),
        );
    }

    pub async fn load_history(&self) -> AsyncResult<Vec<InterviewOut>> {
        self.history.run(self.api.list_interviews()).await
    }

    pub async fn submit(&self, responses: Vec<QuestionAnswerIn>) -> AsyncResult<InterviewOut> {
        let payload = InterviewCreate { responses };
        self.submission
            .run(self.api.create_interview(&payload))
            .await
    }
}
