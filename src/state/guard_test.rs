use super::*;

use crate::net::types::UserProfile;

fn authenticated(role: Option<Role>) -> SessionState {
    SessionState {
        access_token: Some("a".to_owned()),
        refresh_token: Some("r".to_owned()),
        user: role.map(|role| UserProfile {
            id: "1".to_owned(),
            email: "test@test.com".to_owned(),
            role,
            first_name: "Test".to_owned(),
            last_name: "User".to_owned(),
            mfa_enabled: false,
        }),
        is_authenticated: true,
        is_loading: false,
        error: None,
    }
}

// =============================================================
// Private routes
// =============================================================

#[test]
fn private_grants_authenticated_sessions() {
    assert_eq!(
        check_private(&authenticated(Some(Role::User))),
        RouteAccess::Grant
    );
}

#[test]
fn private_redirects_anonymous_to_login() {
    assert_eq!(
        check_private(&SessionState::default()),
        RouteAccess::RedirectToLogin
    );
}

// =============================================================
// Admin routes
// =============================================================

#[test]
fn admin_grants_admin_sessions() {
    assert_eq!(
        check_admin(&authenticated(Some(Role::Admin))),
        RouteAccess::Grant
    );
}

#[test]
fn admin_redirects_anonymous_to_login() {
    assert_eq!(
        check_admin(&SessionState::default()),
        RouteAccess::RedirectToLogin
    );
}

#[test]
fn admin_sends_non_admins_home_not_to_login() {
    assert_eq!(
        check_admin(&authenticated(Some(Role::User))),
        RouteAccess::RedirectToHome
    );
}

#[test]
fn admin_treats_missing_profile_as_non_admin() {
    assert_eq!(
        check_admin(&authenticated(None)),
        RouteAccess::RedirectToHome
    );
}
