//! REST helpers for the RlARndG API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, cookies included so the
//! `auth` session travels with each request.
//! Native builds (tests, tooling): every call reports `ApiError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! Any status above 399 is a failure. The response body is kept on the error
//! because the server explains most failures in plain text, and forms show
//! that text verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiKeySummary, Credentials, RandomKind, TimedValue, User};

pub const AUTH_USER_PATH: &str = "/api/auth/user";
pub const AUTH_LOGIN_PATH: &str = "/api/auth/login";
pub const AUTH_SIGNUP_PATH: &str = "/api/auth/signup";
pub const KEYS_USER_PATH: &str = "/api/keys/user";

/// Overwrites the session cookie with an already-expired one.
pub const LOGOUT_COOKIE: &str = "auth=; Path=/; Expires=Thu, 01 Jan 1970 00:00:01 GMT";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Text suitable for showing next to a form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { body, .. } if !body.trim().is_empty() => body.trim().to_owned(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Raw result of a documentation "try it" request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

pub(crate) fn is_success(status: u16) -> bool {
    status <= 399
}

#[cfg(any(test, feature = "csr"))]
fn key_reset_endpoint(id: i64) -> String {
    format!("/api/keys/reset?id={id}")
}

#[cfg(feature = "csr")]
mod http {
    use gloo_net::http::Response;
    use serde::de::DeserializeOwned;

    use super::{ApiError, is_success};

    pub(super) fn network(e: gloo_net::Error) -> ApiError {
        ApiError::Network(e.to_string())
    }

    pub(super) async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if is_success(status) {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }

    pub(super) async fn json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        ensure_ok(resp)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn text(resp: Response) -> Result<String, ApiError> {
        ensure_ok(resp)
            .await?
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Fetch the signed-in user from `GET /api/auth/user`.
///
/// # Errors
///
/// `ApiError::Status` when there is no valid session, `Network`/`Decode` on
/// transport failures.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = crate::config::config().api_url(AUTH_USER_PATH);
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(http::network)?;
        http::json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

async fn post_credentials(path: &str, credentials: &Credentials) -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = crate::config::config().api_url(path);
        let resp = gloo_net::http::Request::post(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .json(credentials)
            .map_err(http::network)?
            .send()
            .await
            .map_err(http::network)?;
        http::json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, credentials);
        Err(ApiError::Unavailable)
    }
}

/// Sign in via `POST /api/auth/login`; the server sets the `auth` cookie.
///
/// # Errors
///
/// Returns the server's explanation as `ApiError::Status` on rejected logins.
pub async fn login(credentials: &Credentials) -> Result<User, ApiError> {
    post_credentials(AUTH_LOGIN_PATH, credentials).await
}

/// Create an account via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns `ApiError::Status` (e.g. 400 on an email conflict) or a transport error.
pub async fn register(credentials: &Credentials) -> Result<User, ApiError> {
    post_credentials(AUTH_SIGNUP_PATH, credentials).await
}

/// Drop the session cookie in the browser.
pub fn logout() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok());
        match document {
            Some(document) => {
                if let Err(e) = document.set_cookie(LOGOUT_COOKIE) {
                    log::warn!("failed to clear auth cookie: {e:?}");
                }
            }
            None => log::warn!("no html document, auth cookie left in place"),
        }
    }
}

/// List the current user's API keys via `GET /api/keys/user`.
///
/// # Errors
///
/// Returns `ApiError` if the request fails or the session is missing.
pub async fn fetch_key_ids() -> Result<Vec<ApiKeySummary>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = crate::config::config().api_url(KEYS_USER_PATH);
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(http::network)?;
        http::json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Rotate a key via `POST /api/keys/reset?id=<id>`; returns the new token.
///
/// # Errors
///
/// Returns `ApiError` if the request fails or the key is not owned by the user.
pub async fn reset_key(id: i64) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = crate::config::config().api_url(&key_reset_endpoint(id));
        let resp = gloo_net::http::Request::post(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(http::network)?;
        http::text(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one value from the `/random` endpoints.
///
/// # Errors
///
/// Returns `ApiError` on transport failures or a non-JSON body.
pub async fn fetch_random(kind: RandomKind) -> Result<TimedValue, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = crate::config::config().api_url(&kind.endpoint());
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(http::network)?;
        http::json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = kind;
        Err(ApiError::Unavailable)
    }
}

/// Issue an uncached, cookie-less GET and return whatever came back,
/// including error statuses.
///
/// # Errors
///
/// Only transport failures are errors; HTTP error statuses are returned as-is.
pub async fn try_endpoint(url: &str) -> Result<RawResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .cache(web_sys::RequestCache::NoCache)
            .credentials(web_sys::RequestCredentials::Omit)
            .send()
            .await
            .map_err(http::network)?;
        let status = resp.status();
        let status_text = resp.status_text();
        let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(RawResponse { status, status_text, body })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}
