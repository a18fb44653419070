//! Authentication collaborator: the abstract operations the session store
//! needs from the backend, plus their HTTP implementation.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against
//! `/api/auth/*`. Server-side (SSR): stubs returning errors since these
//! endpoints are only meaningful in the browser.
//!
//! The trait exists so the session store can be exercised against an
//! in-memory double; `HttpAuthApi` is the only implementation that ships.

use crate::net::types::{TokenPair, UserProfile, VerifiedTokens};

/// Failure of a collaborator call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the request and supplied a message.
    #[error("{0}")]
    Server(String),
    /// The request never produced a usable response.
    #[error("network error: {0}")]
    Network(String),
    /// The response could not be interpreted.
    #[error("unexpected response")]
    Invalid,
}

impl ApiError {
    /// Message suitable for direct display. Only server-supplied messages are
    /// shown verbatim; everything else falls back to the generic wording.
    pub fn user_message(&self) -> String {
        match self {
            Self::Server(message) => message.clone(),
            Self::Network(_) | Self::Invalid => "Erreur de connexion".to_owned(),
        }
    }
}

/// Operations of the authentication backend.
///
/// Futures are deliberately not `Send`: everything runs on the single
/// browser thread and the HTTP implementation holds JS values across awaits.
#[allow(async_fn_in_trait)]
pub trait AuthApi: Clone + 'static {
    /// Exchange credentials for a token pair.
    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, ApiError>;

    /// Exchange a refresh token for a new token pair.
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError>;

    /// Fetch the profile of the bearer of `access_token`.
    async fn current_user(&self, access_token: &str) -> Result<UserProfile, ApiError>;

    /// Redeem an email-verification token. May or may not mint a session.
    async fn verify_email(&self, token: &str) -> Result<VerifiedTokens, ApiError>;
}

/// `AuthApi` over the real REST endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

impl AuthApi for HttpAuthApi {
    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            #[derive(serde::Serialize)]
            struct LoginRequest<'a> {
                email: &'a str,
                password: &'a str,
            }

            let resp = gloo_net::http::Request::post("/api/auth/login")
                .json(&LoginRequest { email, password })
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(error_from_response(&resp).await);
            }
            resp.json::<TokenPair>().await.map_err(|_| ApiError::Invalid)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(server_stub())
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            #[derive(serde::Serialize)]
            #[serde(rename_all = "camelCase")]
            struct RefreshRequest<'a> {
                refresh_token: &'a str,
            }

            let resp = gloo_net::http::Request::post("/api/auth/refresh")
                .json(&RefreshRequest { refresh_token })
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(error_from_response(&resp).await);
            }
            resp.json::<TokenPair>().await.map_err(|_| ApiError::Invalid)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = refresh_token;
            Err(server_stub())
        }
    }

    async fn current_user(&self, access_token: &str) -> Result<UserProfile, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get("/api/auth/me")
                .header("Authorization", &format!("Bearer {access_token}"))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(error_from_response(&resp).await);
            }
            resp.json::<UserProfile>().await.map_err(|_| ApiError::Invalid)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = access_token;
            Err(server_stub())
        }
    }

    async fn verify_email(&self, token: &str) -> Result<VerifiedTokens, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            #[derive(serde::Serialize)]
            struct VerifyRequest<'a> {
                token: &'a str,
            }

            let resp = gloo_net::http::Request::post("/api/auth/verify-email")
                .json(&VerifyRequest { token })
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(error_from_response(&resp).await);
            }
            resp.json::<VerifiedTokens>().await.map_err(|_| ApiError::Invalid)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(server_stub())
        }
    }
}

/// Map an error response body to `ApiError`, keeping the server's `message`
/// field when there is one.
#[cfg(feature = "hydrate")]
async fn error_from_response(resp: &gloo_net::http::Response) -> ApiError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    match resp.json::<ErrorBody>().await {
        Ok(ErrorBody { message: Some(message) }) => ApiError::Server(message),
        _ => ApiError::Invalid,
    }
}

#[cfg(not(feature = "hydrate"))]
fn server_stub() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}
