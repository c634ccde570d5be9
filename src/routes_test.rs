use super::*;

use futures::executor::block_on;

use crate::router::Outcome;
use crate::test_support::{StubAuth, alice};

// =============================================================
// Anonymous visitor
// =============================================================

#[test]
fn anonymous_user_panel_redirects_to_login() {
    let router = app_router(StubAuth::anonymous()).unwrap();
    assert_eq!(block_on(router.resolve("/user")), Outcome::Redirect("/login".to_owned()));
}

#[test]
fn anonymous_landing_renders_without_identity() {
    let router = app_router(StubAuth::anonymous()).unwrap();
    assert_eq!(block_on(router.resolve("/")), Outcome::Render(Page::Landing { user: None }));
}

#[test]
fn anonymous_auth_pages_render() {
    let router = app_router(StubAuth::anonymous()).unwrap();
    assert_eq!(block_on(router.resolve("/login")), Outcome::Render(Page::Login));
    assert_eq!(block_on(router.resolve("/register")), Outcome::Render(Page::Register));
}

// =============================================================
// Signed-in visitor
// =============================================================

#[test]
fn signed_in_user_panel_receives_identity() {
    let router = app_router(StubAuth::signed_in(alice())).unwrap();
    assert_eq!(block_on(router.resolve("/user")), Outcome::Render(Page::UserPanel { user: alice() }));
}

#[test]
fn signed_in_login_bounces_to_panel() {
    let router = app_router(StubAuth::signed_in(alice())).unwrap();
    assert_eq!(block_on(router.resolve("/login")), Outcome::Redirect("/user".to_owned()));
    assert_eq!(block_on(router.resolve("/register")), Outcome::Redirect("/user".to_owned()));
}

#[test]
fn signed_in_docs_and_pricing_carry_identity() {
    let router = app_router(StubAuth::signed_in(alice())).unwrap();
    assert_eq!(block_on(router.resolve("/docs")), Outcome::Render(Page::Docs { user: Some(alice()) }));
    assert_eq!(block_on(router.resolve("/pricing")), Outcome::Render(Page::Pricing { user: Some(alice()) }));
}

// =============================================================
// Table shape
// =============================================================

#[test]
fn unknown_paths_fall_back_home() {
    let router = app_router(StubAuth::anonymous()).unwrap();
    for path in ["/nope", "/docs/extra", "/user/keys", "/transaction_success"] {
        assert_eq!(block_on(router.resolve(path)), Outcome::Redirect("/".to_owned()), "{path}");
    }
}

#[test]
fn signup_alias_redirects_without_auth_check() {
    let auth = StubAuth::signed_in(alice());
    let router = app_router(auth.clone()).unwrap();
    assert_eq!(block_on(router.resolve("/signup")), Outcome::Redirect("/register".to_owned()));
    assert_eq!(auth.calls(), 0);
}

#[test]
fn offline_auth_degrades_per_route() {
    let router = app_router(StubAuth::offline()).unwrap();
    assert_eq!(block_on(router.resolve("/docs")), Outcome::Render(Page::Docs { user: None }));
    assert_eq!(block_on(router.resolve("/login")), Outcome::Render(Page::Login));
    assert_eq!(block_on(router.resolve("/user")), Outcome::Redirect("/login".to_owned()));
}

#[test]
fn docs_resolution_is_repeatable() {
    let router = app_router(StubAuth::anonymous()).unwrap();
    let first = block_on(router.resolve("/docs"));
    let second = block_on(router.resolve("/docs"));
    assert_eq!(first, second);
}

#[test]
fn user_panel_without_identity_falls_back_to_login_view() {
    assert_eq!(user_panel(None), Page::Login);
    assert_eq!(user_panel(Some(alice())), Page::UserPanel { user: alice() });
}
