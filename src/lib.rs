//! # rlarndg-web
//!
//! Leptos + WASM frontend for the RlARndG random-number API: landing page,
//! documentation browser, login/register forms and the user key panel.
//!
//! Page selection goes through `router`, which matches the browser path
//! against the table in `routes` and runs async auth guards before anything
//! is mounted.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(config::config().log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }
    log::info!("rlarndg-web starting");
    leptos::mount::mount_to_body(app::App);
}
