//! Application route table.
//!
//! Patterns are anchored regexes matched against normalized paths. Order
//! matters: the first matching entry wins and anything unmatched falls back
//! to `/`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::rc::Rc;

use crate::net::types::User;
use crate::router::{Route, Router, RouterError};
use crate::state::auth::AuthCheck;
use crate::util::auth::{optional_user, redirect_if_authenticated, require_user};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const USER_PATH: &str = "/user";

/// Page selected by a successful resolution, with whatever identity its
/// guards produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Landing { user: Option<User> },
    Docs { user: Option<User> },
    Pricing { user: Option<User> },
    Login,
    Register,
    UserPanel { user: User },
}

/// Build the route table used by the app.
///
/// # Errors
///
/// Returns `RouterError::Pattern` if a route pattern fails to compile.
pub fn app_router(auth: Rc<dyn AuthCheck>) -> Result<Router<User, Page>, RouterError> {
    let routes = vec![
        Route::component("^/$", |user| Page::Landing { user }, vec![optional_user(auth.clone())])?,
        Route::component("^/docs$", |user| Page::Docs { user }, vec![optional_user(auth.clone())])?,
        Route::component("^/pricing$", |user| Page::Pricing { user }, vec![optional_user(auth.clone())])?,
        Route::component("^/login$", |_| Page::Login, vec![redirect_if_authenticated(auth.clone(), USER_PATH)])?,
        Route::component("^/register$", |_| Page::Register, vec![redirect_if_authenticated(auth.clone(), USER_PATH)])?,
        Route::redirect("^/signup$", REGISTER_PATH)?,
        Route::component("^/user$", user_panel, vec![require_user(auth, LOGIN_PATH)])?,
    ];
    Ok(Router::new(routes).with_fallback(HOME_PATH))
}

/// `require_user` always forwards a user; without one the panel has nothing
/// to show, so the login form is rendered instead.
fn user_panel(user: Option<User>) -> Page {
    match user {
        Some(user) => Page::UserPanel { user },
        None => Page::Login,
    }
}
