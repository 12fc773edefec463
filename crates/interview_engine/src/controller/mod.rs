//! Screen controllers: each owns its runners or session and publishes state
//! for a passive view layer.
mod analytics;
mod interview;
mod upload;

pub use analytics::AnalyticsController;
pub use interview::InterviewController;
pub use upload::UploadController;
