//! Navigation host abstraction.
//!
//! The router never touches `window.location` directly; it goes through
//! `Host` so resolution can run under plain `cargo test`.

use leptos::prelude::*;

/// Environment that can report the current path, perform a full navigation,
/// and mount a resolved view.
pub trait Host<V> {
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str);
    fn mount(&self, view: V);
}

/// Browser host backed by `window.location` and a reactive view slot.
pub struct BrowserHost<V: Send + Sync + 'static> {
    slot: RwSignal<Option<V>>,
}

impl<V: Send + Sync + 'static> Clone for BrowserHost<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Send + Sync + 'static> Copy for BrowserHost<V> {}

impl<V: Send + Sync + 'static> BrowserHost<V> {
    pub fn new(slot: RwSignal<Option<V>>) -> Self {
        Self { slot }
    }
}

impl<V: Send + Sync + 'static> Host<V> for BrowserHost<V> {
    fn current_path(&self) -> String {
        current_location_path()
    }

    fn navigate(&self, path: &str) {
        assign_location(path);
    }

    fn mount(&self, view: V) {
        self.slot.set(Some(view));
    }
}

/// `location.pathname`, or `/` outside the browser.
pub fn current_location_path() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        "/".to_owned()
    }
}

/// Full page navigation via `location.assign`.
pub fn assign_location(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().assign(path) {
                log::error!("navigation to {path} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("navigation to {path} ignored outside the browser");
    }
}
