use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;
use leptos::prelude::Owner;

use crate::net::types::{Role, VerifiedTokens};

/// In-memory `AuthApi` double with queued results and call counters.
#[derive(Clone, Default)]
struct MockApi {
    inner: Rc<RefCell<MockInner>>,
}

#[derive(Default)]
struct MockInner {
    login_result: Option<Result<TokenPair, ApiError>>,
    refresh_result: Option<Result<TokenPair, ApiError>>,
    user_result: Option<Result<UserProfile, ApiError>>,
    verify_result: Option<Result<VerifiedTokens, ApiError>>,
    login_calls: usize,
    refresh_calls: usize,
    user_calls: usize,
    login_gate: Option<oneshot::Receiver<()>>,
}

impl MockApi {
    fn queue_login(&self, result: Result<TokenPair, ApiError>) {
        self.inner.borrow_mut().login_result = Some(result);
    }

    fn queue_refresh(&self, result: Result<TokenPair, ApiError>) {
        self.inner.borrow_mut().refresh_result = Some(result);
    }

    fn queue_user(&self, result: Result<UserProfile, ApiError>) {
        self.inner.borrow_mut().user_result = Some(result);
    }

    fn queue_verify(&self, result: Result<VerifiedTokens, ApiError>) {
        self.inner.borrow_mut().verify_result = Some(result);
    }

    fn gate_login(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.inner.borrow_mut().login_gate = Some(rx);
        tx
    }

    fn refresh_calls(&self) -> usize {
        self.inner.borrow().refresh_calls
    }

    fn user_calls(&self) -> usize {
        self.inner.borrow().user_calls
    }
}

impl AuthApi for MockApi {
    async fn login(&self, _email: &str, _password: &str) -> Result<TokenPair, ApiError> {
        let gate = {
            let mut inner = self.inner.borrow_mut();
            inner.login_calls += 1;
            inner.login_gate.take()
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.inner
            .borrow_mut()
            .login_result
            .take()
            .expect("login result queued")
    }

    async fn refresh(&self, _refresh_token: &str) -> Result<TokenPair, ApiError> {
        let mut inner = self.inner.borrow_mut();
        inner.refresh_calls += 1;
        inner.refresh_result.take().expect("refresh result queued")
    }

    async fn current_user(&self, _access_token: &str) -> Result<UserProfile, ApiError> {
        let mut inner = self.inner.borrow_mut();
        inner.user_calls += 1;
        inner.user_result.take().expect("user result queued")
    }

    async fn verify_email(&self, _token: &str) -> Result<VerifiedTokens, ApiError> {
        self.inner
            .borrow_mut()
            .verify_result
            .take()
            .expect("verify result queued")
    }
}

fn setup() -> (MockApi, SessionStore<MockApi>, Owner) {
    let owner = Owner::new();
    owner.set();
    let api = MockApi::default();
    let store = SessionStore::new(api.clone());
    (api, store, owner)
}

fn tokens(access: &str, refresh: &str) -> TokenPair {
    TokenPair {
        access_token: access.to_owned(),
        refresh_token: refresh.to_owned(),
    }
}

fn profile(email: &str, role: Role) -> UserProfile {
    UserProfile {
        id: "1".to_owned(),
        email: email.to_owned(),
        role,
        first_name: "Test".to_owned(),
        last_name: "User".to_owned(),
        mfa_enabled: false,
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn initial_state_is_anonymous() {
    let (_api, store, _owner) = setup();
    let state = store.snapshot();

    assert!(state.access_token.is_none());
    assert!(state.refresh_token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_stores_tokens_and_profile() {
    let (api, store, _owner) = setup();
    api.queue_login(Ok(tokens("access123", "refresh123")));
    api.queue_user(Ok(profile("test@test.com", Role::User)));

    let result = block_on(store.login("test@test.com", "password"));
    assert!(result.is_ok());

    let state = store.snapshot();
    assert_eq!(state.access_token.as_deref(), Some("access123"));
    assert_eq!(state.refresh_token.as_deref(), Some("refresh123"));
    assert!(state.is_authenticated);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
    assert_eq!(
        state.user.as_ref().map(|u| u.email.as_str()),
        Some("test@test.com")
    );
}

#[test]
fn login_failure_records_error_and_rejects() {
    let (api, store, _owner) = setup();
    api.queue_login(Err(ApiError::Server("Invalid credentials".to_owned())));

    let result = block_on(store.login("test@test.com", "wrong"));
    assert!(result.is_err());

    let state = store.snapshot();
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
    assert!(state.access_token.is_none());
}

#[test]
fn login_failure_without_server_message_uses_fallback() {
    let (api, store, _owner) = setup();
    api.queue_login(Err(ApiError::Network("timeout".to_owned())));

    assert!(block_on(store.login("test@test.com", "password")).is_err());
    assert_eq!(
        store.snapshot().error.as_deref(),
        Some("Erreur de connexion")
    );
}

#[test]
fn login_clears_previous_error() {
    let (api, store, _owner) = setup();
    api.queue_login(Err(ApiError::Server("first".to_owned())));
    let _ = block_on(store.login("test@test.com", "bad"));
    assert!(store.snapshot().error.is_some());

    api.queue_login(Ok(tokens("a", "r")));
    api.queue_user(Ok(profile("test@test.com", Role::User)));
    assert!(block_on(store.login("test@test.com", "good")).is_ok());
    assert!(store.snapshot().error.is_none());
}

#[test]
fn login_profile_fetch_failure_forces_logout() {
    let (api, store, _owner) = setup();
    api.queue_login(Ok(tokens("a", "r")));
    api.queue_user(Err(ApiError::Invalid));

    // The credential exchange itself succeeded, so login resolves; the
    // untrusted session is degraded to anonymous.
    assert!(block_on(store.login("test@test.com", "password")).is_ok());
    assert_eq!(store.snapshot(), SessionState::default());
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_resets_to_zero_value_state() {
    let (_api, store, _owner) = setup();
    store.set_tokens("a", "r");
    store.state().update(|s| {
        s.user = Some(profile("test@test.com", Role::User));
        s.error = Some("boom".to_owned());
    });

    store.logout();

    assert_eq!(store.snapshot(), SessionState::default());
}

#[test]
fn logout_is_idempotent() {
    let (_api, store, _owner) = setup();
    store.set_tokens("a", "r");

    store.logout();
    let after_first = store.snapshot();
    store.logout();

    assert_eq!(store.snapshot(), after_first);
    assert_eq!(store.snapshot(), SessionState::default());
}

// =============================================================
// set_tokens
// =============================================================

#[test]
fn set_tokens_marks_authenticated() {
    let (_api, store, _owner) = setup();

    store.set_tokens("new-access", "new-refresh");

    let state = store.snapshot();
    assert_eq!(state.access_token.as_deref(), Some("new-access"));
    assert_eq!(state.refresh_token.as_deref(), Some("new-refresh"));
    assert!(state.is_authenticated);
    assert!(state.user.is_none());
}

#[test]
fn set_tokens_leaves_user_and_error_untouched() {
    let (_api, store, _owner) = setup();
    store.state().update(|s| {
        s.user = Some(profile("test@test.com", Role::User));
        s.error = Some("stale".to_owned());
    });

    store.set_tokens("a", "r");

    let state = store.snapshot();
    assert!(state.user.is_some());
    assert_eq!(state.error.as_deref(), Some("stale"));
}

// =============================================================
// refresh_access_token
// =============================================================

#[test]
fn refresh_without_token_forces_logout_without_network_call() {
    let (api, store, _owner) = setup();
    store.state().update(|s| {
        s.access_token = Some("a".to_owned());
        s.is_authenticated = true;
    });

    block_on(store.refresh_access_token());

    assert!(!store.snapshot().is_authenticated);
    assert!(store.snapshot().access_token.is_none());
    assert_eq!(api.refresh_calls(), 0);
}

#[test]
fn refresh_failure_forces_logout() {
    let (api, store, _owner) = setup();
    store.set_tokens("a", "r");
    api.queue_refresh(Err(ApiError::Server("refresh token expired".to_owned())));

    block_on(store.refresh_access_token());

    assert_eq!(store.snapshot(), SessionState::default());
    assert_eq!(api.refresh_calls(), 1);
}

#[test]
fn refresh_success_rotates_both_tokens() {
    let (api, store, _owner) = setup();
    store.set_tokens("a1", "r1");
    api.queue_refresh(Ok(tokens("a2", "r2")));

    block_on(store.refresh_access_token());

    let state = store.snapshot();
    assert_eq!(state.access_token.as_deref(), Some("a2"));
    assert_eq!(state.refresh_token.as_deref(), Some("r2"));
    assert!(state.is_authenticated);
}

// =============================================================
// fetch_current_user
// =============================================================

#[test]
fn fetch_current_user_stores_profile() {
    let (api, store, _owner) = setup();
    store.set_tokens("a", "r");
    api.queue_user(Ok(profile("admin@investai.fr", Role::Admin)));

    block_on(store.fetch_current_user());

    let state = store.snapshot();
    assert!(state.is_authenticated);
    assert_eq!(state.user.as_ref().map(|u| u.role), Some(Role::Admin));
}

#[test]
fn fetch_current_user_failure_forces_logout() {
    let (api, store, _owner) = setup();
    store.set_tokens("a", "r");
    api.queue_user(Err(ApiError::Server("unauthorized".to_owned())));

    block_on(store.fetch_current_user());

    assert_eq!(store.snapshot(), SessionState::default());
    assert_eq!(api.user_calls(), 1);
}

#[test]
fn fetch_current_user_without_token_forces_logout_without_network_call() {
    let (api, store, _owner) = setup();
    store.state().update(|s| s.is_authenticated = true);

    block_on(store.fetch_current_user());

    assert!(!store.snapshot().is_authenticated);
    assert_eq!(api.user_calls(), 0);
}

// =============================================================
// verify_email
// =============================================================

#[test]
fn verify_email_with_tokens_installs_session() {
    let (api, store, _owner) = setup();
    api.queue_verify(Ok(VerifiedTokens {
        access_token: Some("a".to_owned()),
        refresh_token: Some("r".to_owned()),
    }));

    let minted = block_on(store.verify_email("mail-token")).expect("verify should succeed");

    assert!(minted);
    assert!(store.snapshot().is_authenticated);
}

#[test]
fn verify_email_without_tokens_leaves_anonymous() {
    let (api, store, _owner) = setup();
    api.queue_verify(Ok(VerifiedTokens::default()));

    let minted = block_on(store.verify_email("mail-token")).expect("verify should succeed");

    assert!(!minted);
    assert!(!store.snapshot().is_authenticated);
}

// =============================================================
// clear_error / restore
// =============================================================

#[test]
fn clear_error_touches_nothing_else() {
    let (_api, store, _owner) = setup();
    store.set_tokens("a", "r");
    store.state().update(|s| s.error = Some("boom".to_owned()));

    store.clear_error();

    let state = store.snapshot();
    assert!(state.error.is_none());
    assert_eq!(state.access_token.as_deref(), Some("a"));
    assert!(state.is_authenticated);
}

#[test]
fn restore_from_storage_without_persisted_tokens_is_a_no_op() {
    let (_api, store, _owner) = setup();

    assert!(!store.restore_from_storage());
    assert_eq!(store.snapshot(), SessionState::default());
}

// =============================================================
// Stale completions
// =============================================================

#[test]
fn stale_login_cannot_resurrect_a_logged_out_session() {
    let (api, store, _owner) = setup();
    let gate = api.gate_login();
    api.queue_login(Ok(tokens("late-access", "late-refresh")));

    let mut pool = LocalPool::new();
    let in_flight = store.clone();
    pool.spawner()
        .spawn_local(async move {
            let _ = in_flight.login("test@test.com", "password").await;
        })
        .expect("spawn login");

    // Login is parked on the collaborator call when the user logs out.
    pool.run_until_stalled();
    store.logout();

    gate.send(()).expect("release login");
    pool.run_until_stalled();

    assert_eq!(store.snapshot(), SessionState::default());
    assert_eq!(api.user_calls(), 0);
}
