//! Interview history and analytics endpoints.
use interview_core::{
    AnalyticsSummary, InterviewCreate, InterviewOut, LastFiveEntry, SkillPracticed,
};

use crate::{ReqwestTransport, TransportError};

#[async_trait::async_trait]
pub trait InterviewApi: Send + Sync {
    async fn create_interview(&self, payload: &InterviewCreate)
        -> Result<InterviewOut, TransportError>;
    async fn list_interviews(&self) -> Result<Vec<InterviewOut>, TransportError>;
    async fn get_interview(&self, interview_id: i64) -> Result<InterviewOut, TransportError>;
    async fn last_five(&self) -> Result<Vec<LastFiveEntry>, TransportError>;
    async fn analytics_summary(&self) -> Result<AnalyticsSummary, TransportError>;
    async fn skills_practiced(&self) -> Result<Vec<SkillPracticed>, TransportError>;
}

#[async_trait::async_trait]
impl InterviewApi for ReqwestTransport {
    async fn create_interview(
        &self,
        payload: &InterviewCreate,
    ) -> Result<InterviewOut, TransportError> {
        self.post_json("interviews/", payload).await
    }

    async fn list_interviews(&self) -> Result<Vec<InterviewOut>, TransportError> {
        self.get_json("interviews/").await
    }

    async fn get_interview(&self, interview_id: i64) -> Result<InterviewOut, TransportError> {
        self.get_json(&format!("interviews/{interview_id}")).await
    }

    async fn last_five(&self) -> Result<Vec<LastFiveEntry>, TransportError> {
        self.get_json("analytics/last-five").await
    }

    async fn analytics_summary(&self) -> Result<AnalyticsSummary, TransportError> {
        self.get_json("analytics/summary").await
    }

    async fn skills_practiced(&self) -> Result<Vec<SkillPracticed>, TransportError> {
        self.get_json("analytics/skills-practiced").await
    }
}
