//! Interview history and analytics records exchanged with the backend.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswerIn {
    pub question: String,
    pub answer: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswerOut {
    pub id: i64,
    pub interview_id: i64,
    pub question: String,
    pub answer: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillOut {
    pub id: i64,
    pub interview_id: i64,
    pub skill_name: String,
}

/// Body of `POST interviews/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewCreate {
    pub responses: Vec<QuestionAnswerIn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewOut {
    pub id: i64,
    pub score: i32,
    pub feedback_level: String,
    pub summary: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub question_answers: Vec<QuestionAnswerOut>,
    #[serde(default)]
    pub skills: Vec<SkillOut>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastFiveEntry {
    pub id: i64,
    pub score: i32,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub average_score: f32,
    pub highest_score: i32,
    pub lowest_score: i32,
    pub trend_percentage: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillPracticed {
    pub category: String,
    pub session_count: i32,
}
