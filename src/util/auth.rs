//! Auth route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guard settles with a definite `GuardResult`; a failed auth check
//! never leaves resolution pending and never reaches the router as an error.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use crate::net::types::User;
use crate::router::{Guard, GuardResult, guard};
use crate::state::auth::{AuthCheck, AuthStatus};

/// Continue with the signed-in user if there is one, otherwise with `None`.
pub fn optional_user(auth: Rc<dyn AuthCheck>) -> Guard<User> {
    guard(move || {
        let check = auth.check();
        async move {
            match check.await {
                Ok(status) => GuardResult::next(status.into_user()),
                Err(e) => {
                    log::warn!("optional auth check failed, continuing anonymously: {e}");
                    GuardResult::next(None)
                }
            }
        }
    })
}

/// Continue with the signed-in user, or redirect to `login_path`.
pub fn require_user(auth: Rc<dyn AuthCheck>, login_path: &'static str) -> Guard<User> {
    guard(move || {
        let check = auth.check();
        async move {
            match check.await {
                Ok(AuthStatus::Authenticated(user)) => GuardResult::next(Some(user)),
                Ok(AuthStatus::Unauthenticated) => GuardResult::redirect(login_path),
                Err(e) => {
                    log::warn!("auth check failed, sending to {login_path}: {e}");
                    GuardResult::redirect(login_path)
                }
            }
        }
    })
}

/// Redirect already signed-in users to `target`; anonymous users continue.
pub fn redirect_if_authenticated(auth: Rc<dyn AuthCheck>, target: &'static str) -> Guard<User> {
    guard(move || {
        let check = auth.check();
        async move {
            match check.await {
                Ok(AuthStatus::Authenticated(_)) => GuardResult::redirect(target),
                Ok(AuthStatus::Unauthenticated) => GuardResult::next(None),
                Err(e) => {
                    log::warn!("auth check failed, treating visitor as anonymous: {e}");
                    GuardResult::next(None)
                }
            }
        }
    })
}
