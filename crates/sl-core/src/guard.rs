//! Role-based route guard.
//!
//! This guard is a navigation convenience, NOT a security boundary. It only
//! compares the role persisted in client storage against the route, and that
//! value is trivially editable by the user. Access control for any real data
//! has to be enforced by the server.

use crate::role::Role;
use crate::route::Route;

/// Outcome of entering a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Leave before rendering anything from the requested route.
    Redirect { to: Route },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

pub struct RouteGuard;

impl RouteGuard {
    /// Decide whether `route` may be entered with the persisted `role`.
    ///
    /// Unguarded routes always pass. Guarded routes pass only on an exact
    /// role match; a missing role never passes.
    pub fn check(route: &Route, role: Option<Role>) -> GuardDecision {
        match route.required_role() {
            None => GuardDecision::Allow,
            Some(required) if role == Some(required) => GuardDecision::Allow,
            Some(_) => GuardDecision::Redirect { to: Route::SignIn },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teacher_routes_require_teacher() {
        let route = Route::parse("/teacher/analytics");
        assert_eq!(RouteGuard::check(&route, Some(Role::Teacher)), GuardDecision::Allow);
        assert_eq!(
            RouteGuard::check(&route, Some(Role::Student)),
            GuardDecision::Redirect { to: Route::SignIn }
        );
        assert_eq!(
            RouteGuard::check(&route, Some(Role::Parent)),
            GuardDecision::Redirect { to: Route::SignIn }
        );
    }

    #[test]
    fn unset_role_is_redirected() {
        assert_eq!(
            RouteGuard::check(&Route::parse("/parent"), None),
            GuardDecision::Redirect { to: Route::SignIn }
        );
    }

    #[test]
    fn unguarded_routes_always_pass() {
        for route in [Route::Home, Route::App, Route::OnboardingStep2, Route::SignIn] {
            assert!(RouteGuard::check(&route, None).is_allowed());
        }
    }
}
