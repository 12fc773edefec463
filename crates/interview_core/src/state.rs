use crate::view_model::{format_timer, InterviewView};
use crate::UploadOutcome;

/// Generation counter for tickers. A tick is only applied when it carries the
/// epoch of the ticker the session most recently asked for.
pub type TickEpoch = u64;

/// Behavioural questions used when no generated questions are available.
pub const DEFAULT_QUESTIONS: [&str; 10] = [
    "Tell me about a time you had to handle a difficult conflict with a coworker. How did you resolve it?",
    "Where do you see yourself in 5 years?",
    "What is your greatest professional strength?",
    "Describe a challenging project you worked on and how you overcame obstacles.",
    "Why do you want to work at this company?",
    "Tell me about a time when you showed leadership.",
    "How do you handle working under pressure and tight deadlines?",
    "What is a weakness you have been actively working to improve?",
    "Describe a situation where you had to learn something quickly.",
    "Do you have any questions for us?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Active {
        index: usize,
        recording: bool,
        elapsed_seconds: u32,
    },
    /// Terminal. `index` is the last question that was active.
    Finished { index: usize },
}

/// State of one interview run over a fixed list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewSession {
    questions: Vec<String>,
    phase: SessionPhase,
    tick_epoch: TickEpoch,
    dirty: bool,
}

impl Default for InterviewSession {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl InterviewSession {
    /// An empty question list yields a session that is already finished.
    pub fn new(questions: Vec<String>) -> Self {
        let phase = if questions.is_empty() {
            SessionPhase::Finished { index: 0 }
        } else {
            SessionPhase::Active {
                index: 0,
                recording: false,
                elapsed_seconds: 0,
            }
        };
        Self {
            questions,
            phase,
            tick_epoch: 0,
            dirty: false,
        }
    }

    pub fn with_default_questions() -> Self {
        Self::new(DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect())
    }

    /// Uses the generated questions of an analysis, or the default set when
    /// the analysis produced none.
    pub fn from_outcome(outcome: &UploadOutcome) -> Self {
        let questions = outcome.question_texts();
        if questions.is_empty() {
            Self::with_default_questions()
        } else {
            Self::new(questions)
        }
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn index(&self) -> usize {
        match self.phase {
            SessionPhase::Active { index, .. } | SessionPhase::Finished { index } => index,
        }
    }

    pub fn is_recording(&self) -> bool {
        matches!(self.phase, SessionPhase::Active { recording: true, .. })
    }

    pub fn elapsed_seconds(&self) -> u32 {
        match self.phase {
            SessionPhase::Active {
                elapsed_seconds, ..
            } => elapsed_seconds,
            SessionPhase::Finished { .. } => 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, SessionPhase::Finished { .. })
    }

    /// Question text while active; `None` once finished.
    pub fn current_question(&self) -> Option<&str> {
        match self.phase {
            SessionPhase::Active { index, .. } => self.questions.get(index).map(String::as_str),
            SessionPhase::Finished { .. } => None,
        }
    }

    pub fn tick_epoch(&self) -> TickEpoch {
        self.tick_epoch
    }

    pub fn view(&self) -> InterviewView {
        InterviewView {
            question_number: self.index() + 1,
            total_questions: self.total_questions(),
            question_text: self.current_question().unwrap_or_default().to_string(),
            recording: self.is_recording(),
            timer_text: format_timer(self.elapsed_seconds()),
            finished: self.is_finished(),
        }
    }

    /// Returns whether the session changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_phase(&mut self, phase: SessionPhase) {
        if self.phase != phase {
            self.phase = phase;
            self.dirty = true;
        }
    }

    /// Invalidates ticks from every ticker started so far.
    pub(crate) fn next_epoch(&mut self) -> TickEpoch {
        self.tick_epoch += 1;
        self.tick_epoch
    }
}
