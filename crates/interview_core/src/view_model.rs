use crate::UploadOutcome;

/// What the interview screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InterviewView {
    /// 1-based position of the current question.
    pub question_number: usize,
    pub total_questions: usize,
    /// Empty once the session is finished.
    pub question_text: String,
    pub recording: bool,
    pub timer_text: String,
    pub finished: bool,
}

/// What the skills screen renders after a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkillsView {
    pub tech_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub tools: Vec<String>,
    pub experience_years: u32,
    pub generated_questions: Vec<String>,
}

impl SkillsView {
    pub fn from_outcome(outcome: &UploadOutcome) -> Self {
        Self {
            tech_skills: outcome.all_skills(),
            soft_skills: outcome.soft_skills.clone(),
            tools: outcome.tools_frameworks.clone(),
            experience_years: outcome.detected_experience_years,
            generated_questions: outcome.question_texts(),
        }
    }
}

/// Formats elapsed seconds as `MM:SS`. Minutes are not wrapped at 60.
pub fn format_timer(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
