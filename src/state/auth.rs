//! Authentication status for the current browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards ask an `AuthCheck` who is signed in before a page mounts.
//! The HTTP implementation talks to `/api/auth/user`; tests swap in stubs.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use crate::net::api::{self, ApiError};
use crate::net::types::User;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated(User),
    Unauthenticated,
}

impl AuthStatus {
    pub fn into_user(self) -> Option<User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unauthenticated => None,
        }
    }
}

/// Asynchronous "who is signed in" check.
///
/// `Err` means the check itself failed (network, bad payload); callers decide
/// how to degrade.
pub trait AuthCheck {
    fn check(&self) -> LocalBoxFuture<'static, Result<AuthStatus, ApiError>>;
}

/// `AuthCheck` backed by `GET /api/auth/user`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthCheck;

impl AuthCheck for HttpAuthCheck {
    fn check(&self) -> LocalBoxFuture<'static, Result<AuthStatus, ApiError>> {
        async { status_from_response(api::fetch_current_user().await) }.boxed_local()
    }
}

/// Map the `/api/auth/user` result onto an auth status. Any HTTP error status
/// means there is no usable session; transport failures stay errors.
pub fn status_from_response(result: Result<User, ApiError>) -> Result<AuthStatus, ApiError> {
    match result {
        Ok(user) => Ok(AuthStatus::Authenticated(user)),
        Err(e) => match e.status() {
            Some(status) => {
                log::debug!("auth check: no session (status {status})");
                Ok(AuthStatus::Unauthenticated)
            }
            None => Err(e),
        },
    }
}
