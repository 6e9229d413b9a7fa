//! Student onboarding domain.
//!
//! Records collected by the three-step wizard and the pure state machine
//! that drives it.

pub mod model;
pub mod state_machine;

pub use model::{
    AgeRange, Grade, LearningStyle, OnboardingPreferences, OnboardingProfile, StoredPreferences,
    StyleFlags, Subject, SubjectFlags, UserProfile, GRADES,
};
pub use state_machine::{
    OnboardingAction, OnboardingEvent, OnboardingState, OnboardingStateMachine, WizardStep,
};

/// Inline errors shown on a wizard step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OnboardingError {
    #[error("Please enter your name to continue")]
    NameRequired,
    #[error("Unknown age range '{0}'. Choose one of 6-8, 9-11, 11-14, 15+")]
    InvalidAgeRange(String),
    #[error("Unknown grade '{0}'")]
    InvalidGrade(String),
    #[error("Invalid subject: '{0}'. Allowed subjects: reading, science, english, math")]
    UnknownSubject(String),
    #[error("Invalid style: '{0}'. Allowed styles: visual, audio, handsOn")]
    UnknownStyle(String),
    /// Key matched neither a subject nor a style.
    #[error(
        "Invalid preference: '{0}'. Allowed subjects: reading, science, english, math. Allowed styles: visual, audio, handsOn"
    )]
    UnknownPreference(String),
    /// Remote save was rejected or unreachable; the step did not advance.
    #[error("{0}")]
    SaveFailed(String),
}
