//! Logical client routes.
//!
//! Routes are screens, not HTTP endpoints. Paths mirror the ones the web
//! client used so links and redirects stay recognizable.

use std::fmt::{self, Display};

use crate::role::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Landing page (`/`).
    Home,
    SignIn,
    SignUp,
    /// Role selection (`/onboarding`).
    RoleSelect,
    OnboardingStep1,
    OnboardingStep2,
    OnboardingStep3,
    /// Fallback when no usable role was chosen.
    OnboardingDetails,
    /// Student dashboard (`/app`).
    App,
    /// Post sign-in landing (`/dashboard`).
    Dashboard,
    /// Anything under `/teacher`; the payload is the remainder of the path.
    Teacher(String),
    /// Anything under `/parent`; the payload is the remainder of the path.
    Parent(String),
    /// A path this client does not know about.
    Unknown(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        match normalized {
            "" | "/" => Route::Home,
            "/signin" => Route::SignIn,
            "/signup" => Route::SignUp,
            "/onboarding" => Route::RoleSelect,
            "/onboarding/step-1" => Route::OnboardingStep1,
            "/onboarding/step-2" => Route::OnboardingStep2,
            "/onboarding/step-3" => Route::OnboardingStep3,
            "/onboarding/details" => Route::OnboardingDetails,
            "/app" => Route::App,
            "/dashboard" => Route::Dashboard,
            other => {
                if let Some(rest) = other.strip_prefix("/teacher") {
                    Route::Teacher(rest.to_string())
                } else if let Some(rest) = other.strip_prefix("/parent") {
                    Route::Parent(rest.to_string())
                } else {
                    Route::Unknown(other.to_string())
                }
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::SignIn => "/signin".to_string(),
            Route::SignUp => "/signup".to_string(),
            Route::RoleSelect => "/onboarding".to_string(),
            Route::OnboardingStep1 => "/onboarding/step-1".to_string(),
            Route::OnboardingStep2 => "/onboarding/step-2".to_string(),
            Route::OnboardingStep3 => "/onboarding/step-3".to_string(),
            Route::OnboardingDetails => "/onboarding/details".to_string(),
            Route::App => "/app".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Teacher(rest) => format!("/teacher{rest}"),
            Route::Parent(rest) => format!("/parent{rest}"),
            Route::Unknown(path) => path.clone(),
        }
    }

    /// Entry route of a role's dashboard.
    pub fn dashboard_for(role: Role) -> Self {
        match role {
            Role::Teacher => Route::Teacher(String::new()),
            Role::Parent => Route::Parent(String::new()),
            Role::Student => Route::App,
        }
    }

    /// Where "Continue" on the role selector leads.
    ///
    /// Students start the onboarding wizard; teachers and parents go straight
    /// to their dashboards. Without a usable role the generic details screen
    /// is shown.
    pub fn after_role_selection(role: Option<Role>) -> Self {
        match role {
            Some(Role::Student) => Route::OnboardingStep1,
            Some(role) => Route::dashboard_for(role),
            None => Route::OnboardingDetails,
        }
    }

    /// Role a route is restricted to, if any.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::Teacher(_) => Some(Role::Teacher),
            Route::Parent(_) => Some(Role::Parent),
            _ => None,
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
