//! Names of the records kept in client storage.
//!
//! Every key the client reads or writes is listed here so the string names
//! live in exactly one place.

use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StorageKey {
    /// Selected role (`student` | `teacher` | `parent`).
    UserType,
    /// Step-1 record `{name, ageRange, grade}`.
    OnboardingStep1,
    /// Step-2 record `{subjects, styles}`.
    OnboardingStep2,
    /// Combined profile merged from both steps plus `email`.
    UserProfile,
    /// Bearer token from sign-in.
    AuthToken,
    /// Email captured at sign-up; marks a known session.
    SessionEmail,
}

impl StorageKey {
    pub const ALL: [StorageKey; 6] = [
        StorageKey::UserType,
        StorageKey::OnboardingStep1,
        StorageKey::OnboardingStep2,
        StorageKey::UserProfile,
        StorageKey::AuthToken,
        StorageKey::SessionEmail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::UserType => "userType",
            StorageKey::OnboardingStep1 => "onboardingStep1",
            StorageKey::OnboardingStep2 => "onboardingStep2",
            StorageKey::UserProfile => "userProfile",
            StorageKey::AuthToken => "token",
            StorageKey::SessionEmail => "newUserEmail",
        }
    }
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
