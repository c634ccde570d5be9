//! Root application component wiring the router to the browser.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::pages::{
    docs::DocsPage, landing::LandingPage, login::LoginPage, pricing::PricingPage, register::RegisterPage,
    user::UserPanelPage,
};
use crate::router::host::BrowserHost;
use crate::routes::Page;

/// Root application component.
///
/// Nothing is mounted until the first navigation resolves, so a guarded page
/// never flashes before its guards have run.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let page = RwSignal::new(None::<Page>);
    start_routing(BrowserHost::new(page));

    view! {
        <Title text="RlARndG"/>
        <Meta name="description" content="An actual (not pseudo) random number generator API."/>
        <main class="app">{move || page.get().map(render_page)}</main>
    }
}

/// Turn a resolved page into its view.
pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Landing { user } => view! { <LandingPage user=user/> }.into_any(),
        Page::Docs { user } => view! { <DocsPage user=user/> }.into_any(),
        Page::Pricing { user } => view! { <PricingPage user=user/> }.into_any(),
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Register => view! { <RegisterPage/> }.into_any(),
        Page::UserPanel { user } => view! { <UserPanelPage user=user/> }.into_any(),
    }
}

#[cfg(feature = "csr")]
fn start_routing(host: BrowserHost<Page>) {
    use std::rc::Rc;

    use crate::state::auth::{AuthCheck, HttpAuthCheck};

    let auth: Rc<dyn AuthCheck> = Rc::new(HttpAuthCheck);
    let router = match crate::routes::app_router(auth) {
        Ok(router) => Rc::new(router),
        Err(e) => {
            log::error!("route table failed to build: {e}");
            return;
        }
    };

    spawn_navigation(Rc::clone(&router), host);
    listen_history(router, host);
}

#[cfg(not(feature = "csr"))]
fn start_routing(host: BrowserHost<Page>) {
    let _ = host;
}

#[cfg(feature = "csr")]
type AppRouter = std::rc::Rc<crate::router::Router<crate::net::types::User, Page>>;

#[cfg(feature = "csr")]
fn spawn_navigation(router: AppRouter, host: BrowserHost<Page>) {
    leptos::task::spawn_local(async move {
        let resolution = router.navigate_current(&host).await;
        log::debug!("navigation finished: {resolution:?}");
    });
}

/// Re-resolve on back/forward so history entries get the same guards.
#[cfg(feature = "csr")]
fn listen_history(router: AppRouter, host: BrowserHost<Page>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let on_popstate = Closure::<dyn FnMut()>::new(move || spawn_navigation(std::rc::Rc::clone(&router), host));
    if let Err(e) = window.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref()) {
        log::warn!("popstate listener not installed: {e:?}");
    }
    on_popstate.forget();
}
