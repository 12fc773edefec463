//! Interview core: pure data, the async result contract and the interview
//! session state machine.
mod analysis;
mod async_result;
mod effect;
mod failure;
mod msg;
mod profile;
mod records;
mod state;
mod update;
mod view_model;

pub use analysis::{GeneratedQuestion, SkillCategory, TechnicalSkills, UploadOutcome};
pub use async_result::AsyncResult;
pub use effect::Effect;
pub use failure::UploadFailure;
pub use msg::Msg;
pub use profile::{Profile, ProfileStore, ResumeStatus, ResumeSummary};
pub use records::{
    AnalyticsSummary, InterviewCreate, InterviewOut, LastFiveEntry, QuestionAnswerIn,
    QuestionAnswerOut, SkillOut, SkillPracticed,
};
pub use state::{InterviewSession, SessionPhase, TickEpoch, DEFAULT_QUESTIONS};
pub use update::update;
pub use view_model::{format_timer, InterviewView, SkillsView};
