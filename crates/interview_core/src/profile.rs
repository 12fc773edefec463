use std::sync::{Arc, PoisonError, RwLock};

use crate::UploadOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeStatus {
    Active,
    ActionNeeded,
}

/// Facts kept about the most recent successful upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumeSummary {
    pub skill_count: usize,
    pub experience_years: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub display_name: String,
    pub email: String,
    pub resume: Option<ResumeSummary>,
}

impl Profile {
    pub fn resume_status(&self) -> ResumeStatus {
        if self.resume.is_some() {
            ResumeStatus::Active
        } else {
            ResumeStatus::ActionNeeded
        }
    }
}

/// Shared handle to the signed-in profile. Clones observe the same profile.
///
/// The profile exists between `sign_in` and `sign_out`; screens that need to
/// know whether a resume was uploaded are handed a store instead of reading
/// global state.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    inner: Arc<RwLock<Option<Profile>>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any existing profile with a fresh one.
    pub fn sign_in(&self, display_name: impl Into<String>, email: impl Into<String>) {
        let profile = Profile {
            display_name: display_name.into(),
            email: email.into(),
            resume: None,
        };
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(profile);
    }

    pub fn sign_out(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn current(&self) -> Option<Profile> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Marks the resume as uploaded for the signed-in profile.
    /// Returns `false` when nobody is signed in.
    pub fn record_resume(&self, outcome: &UploadOutcome) -> bool {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match guard.as_mut() {
            Some(profile) => {
                profile.resume = Some(ResumeSummary {
                    skill_count: outcome.technical_skills.skill_count(),
                    experience_years: outcome.detected_experience_years,
                });
                true
            }
            None => false,
        }
    }

    pub fn resume_status(&self) -> ResumeStatus {
        self.current()
            .map(|profile| profile.resume_status())
            .unwrap_or(ResumeStatus::ActionNeeded)
    }
}
