//! Shared fixtures for unit tests.

use std::cell::Cell;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use crate::net::api::ApiError;
use crate::net::types::User;
use crate::state::auth::{AuthCheck, AuthStatus};

pub fn alice() -> User {
    User { id: 1, email: "alice@example.com".to_owned() }
}

/// `AuthCheck` answering with a fixed result and counting invocations.
pub struct StubAuth {
    result: Result<AuthStatus, ApiError>,
    calls: Cell<usize>,
}

impl StubAuth {
    pub fn new(result: Result<AuthStatus, ApiError>) -> Rc<Self> {
        Rc::new(Self { result, calls: Cell::new(0) })
    }

    pub fn signed_in(user: User) -> Rc<Self> {
        Self::new(Ok(AuthStatus::Authenticated(user)))
    }

    pub fn anonymous() -> Rc<Self> {
        Self::new(Ok(AuthStatus::Unauthenticated))
    }

    pub fn offline() -> Rc<Self> {
        Self::new(Err(ApiError::Network("connection refused".to_owned())))
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl AuthCheck for StubAuth {
    fn check(&self) -> LocalBoxFuture<'static, Result<AuthStatus, ApiError>> {
        self.calls.set(self.calls.get() + 1);
        futures::future::ready(self.result.clone()).boxed_local()
    }
}
