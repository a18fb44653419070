//! Route guards: pure predicates over session state.
//!
//! "Not allowed" is deliberately distinct from "not logged in": an
//! authenticated non-admin hitting an admin route is sent to the landing
//! page, not back to the login form.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::session::SessionState;

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Grant,
    RedirectToLogin,
    RedirectToHome,
}

/// Gate for routes that require a signed-in user.
pub fn check_private(state: &SessionState) -> RouteAccess {
    if state.is_authenticated {
        RouteAccess::Grant
    } else {
        RouteAccess::RedirectToLogin
    }
}

/// Gate for admin-only routes. A missing profile counts as non-admin.
pub fn check_admin(state: &SessionState) -> RouteAccess {
    if !state.is_authenticated {
        return RouteAccess::RedirectToLogin;
    }
    match &state.user {
        Some(user) if user.role == Role::Admin => RouteAccess::Grant,
        _ => RouteAccess::RedirectToHome,
    }
}
