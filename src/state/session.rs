//! Client-side session authority.
//!
//! `SessionStore` is the single owner of authentication state: credential
//! acquisition, silent refresh, and invalidation all funnel through its
//! commands, and every other API-backed view only reads the derived state.
//! The store is created once at the application root and injected via
//! context; nothing else mutates `SessionState`.
//!
//! FAILURE POLICY
//! ==============
//! `login` (and `verify_email`) are foreground operations: they re-raise so
//! the calling form can show a field-level message. `refresh_access_token`
//! and `fetch_current_user` run from background contexts and never raise;
//! any failure degrades the session to the anonymous zero-value state via a
//! forced logout. A session that cannot be refreshed or whose profile the
//! server no longer honors is not trusted to stay authenticated.
//!
//! Each session epoch (login attempt, `set_tokens`, logout) bumps a
//! generation counter; state writes after an await are dropped when the
//! generation moved on, so a stale in-flight call cannot overwrite state
//! established by a later logout or login.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::{GetUntracked, RwSignal, Set, Update};

use crate::net::auth::{ApiError, AuthApi, HttpAuthApi};
use crate::net::types::{TokenPair, UserProfile};
use crate::util::token_storage;

/// Authentication state. `Default` is the anonymous zero-value state.
///
/// `is_authenticated == true` implies `access_token.is_some()`; the profile
/// and the flag are dropped together on every path that loses authentication.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Single authority over [`SessionState`], generic over the auth backend so
/// tests can drive it with an in-memory double.
#[derive(Clone)]
pub struct SessionStore<A: AuthApi = HttpAuthApi> {
    state: RwSignal<SessionState>,
    generation: Arc<AtomicU64>,
    api: A,
}

impl<A: AuthApi> SessionStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            generation: Arc::new(AtomicU64::new(0)),
            api,
        }
    }

    /// Reactive handle on the session state, for views and guards.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Current state, read without subscribing.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Current access token, read without subscribing.
    pub fn access_token(&self) -> Option<String> {
        self.state.get_untracked().access_token
    }

    /// Exchange credentials for a session, then load the profile.
    ///
    /// The profile fetch shares the background failure policy: if the token
    /// is accepted but the profile cannot be fetched, the session degrades to
    /// anonymous while `login` itself still resolves. `is_loading` is cleared
    /// on every exit path.
    ///
    /// # Errors
    ///
    /// Re-raises the collaborator failure so the calling form can react;
    /// the same message is recorded in `SessionState::error`.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let generation = self.next_generation();
        self.state.update(|s| {
            s.is_loading = true;
            s.error = None;
        });

        match self.api.login(email, password).await {
            Ok(tokens) => {
                if self.is_current(generation) {
                    self.install_tokens(&tokens);
                    self.fetch_current_user_guarded(generation).await;
                }
                if self.is_current(generation) {
                    self.state.update(|s| s.is_loading = false);
                }
                Ok(())
            }
            Err(err) => {
                if self.is_current(generation) {
                    self.state.update(|s| {
                        s.error = Some(err.user_message());
                        s.is_loading = false;
                    });
                }
                Err(err)
            }
        }
    }

    /// Reset to the anonymous zero-value state and drop persisted tokens.
    /// Local only, no network call. Idempotent.
    pub fn logout(&self) {
        self.next_generation();
        self.state.set(SessionState::default());
        token_storage::clear();
    }

    /// Install a token pair acquired out of band (email verification).
    /// Leaves `user` and `error` untouched.
    pub fn set_tokens(&self, access_token: &str, refresh_token: &str) {
        self.next_generation();
        self.state.update(|s| {
            s.access_token = Some(access_token.to_owned());
            s.refresh_token = Some(refresh_token.to_owned());
            s.is_authenticated = true;
        });
        token_storage::save(access_token, refresh_token);
    }

    /// Rotate the token pair using the stored refresh token.
    ///
    /// Without a refresh token the session cannot continue: forced logout,
    /// no network call. Any refresh failure also degrades to logout; this
    /// runs from interceptor contexts and never raises.
    pub async fn refresh_access_token(&self) {
        let Some(refresh_token) = self.state.get_untracked().refresh_token else {
            self.logout();
            return;
        };

        let generation = self.current_generation();
        match self.api.refresh(&refresh_token).await {
            Ok(tokens) if self.is_current(generation) => self.install_tokens(&tokens),
            Err(err) if self.is_current(generation) => {
                leptos::logging::warn!("token refresh failed, dropping session: {err}");
                self.logout();
            }
            // A logout or new login superseded this call; drop the result.
            Ok(_) | Err(_) => {}
        }
    }

    /// Load the profile of the current access token into `user`.
    /// Failure degrades to logout; never raises.
    pub async fn fetch_current_user(&self) {
        let generation = self.current_generation();
        self.fetch_current_user_guarded(generation).await;
    }

    /// Redeem an email-verification token; installs the minted session when
    /// the server returns one. Returns whether a session was established.
    ///
    /// # Errors
    ///
    /// Re-raises the collaborator failure so the verification page can react.
    pub async fn verify_email(&self, token: &str) -> Result<bool, ApiError> {
        let verified = self.api.verify_email(token).await?;
        match (verified.access_token, verified.refresh_token) {
            (Some(access), Some(refresh)) => {
                self.set_tokens(&access, &refresh);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Clear the recorded error. Touches nothing else.
    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }

    /// Resume a persisted session after a page reload. Returns whether a
    /// token pair was restored; the caller is expected to chain a profile
    /// fetch, which validates the tokens against the server.
    pub fn restore_from_storage(&self) -> bool {
        match token_storage::load() {
            Some(tokens) => {
                self.set_tokens(&tokens.access_token, &tokens.refresh_token);
                true
            }
            None => false,
        }
    }

    async fn fetch_current_user_guarded(&self, generation: u64) {
        let Some(access_token) = self.state.get_untracked().access_token else {
            self.logout();
            return;
        };

        match self.api.current_user(&access_token).await {
            Ok(profile) if self.is_current(generation) => {
                self.state.update(|s| s.user = Some(profile));
            }
            Err(err) if self.is_current(generation) => {
                leptos::logging::warn!("profile fetch failed, dropping session: {err}");
                self.logout();
            }
            Ok(_) | Err(_) => {}
        }
    }

    fn install_tokens(&self, tokens: &TokenPair) {
        self.state.update(|s| {
            s.access_token = Some(tokens.access_token.clone());
            s.refresh_token = Some(tokens.refresh_token.clone());
            s.is_authenticated = true;
        });
        token_storage::save(&tokens.access_token, &tokens.refresh_token);
    }

    fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.current_generation() == generation
    }
}
