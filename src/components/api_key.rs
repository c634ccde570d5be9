//! One API key row in the user panel, with a two-step reset.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::net::api;

/// Placeholder shown until a reset reveals the new token.
pub const MASKED_KEY: &str = "****************************************************";

#[component]
pub fn ApiKeyRow(id: i64, number: usize) -> impl IntoView {
    let shown = RwSignal::new(None::<String>);
    let confirming = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let on_reset = move |_| {
        confirming.set(false);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::reset_key(id).await {
                Ok(token) => {
                    log::info!("api key {id} reset");
                    error.set(String::new());
                    shown.set(Some(token));
                }
                Err(e) => {
                    log::warn!("api key {id} reset failed: {e}");
                    error.set(e.user_message());
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    };

    view! {
        <div class="api-key">
            <h3>{format!("Key {number}")}</h3>
            <input readonly=true prop:value=move || shown.get().unwrap_or_else(|| MASKED_KEY.to_owned())/>
            <div>
                <Show
                    when=move || confirming.get()
                    fallback=move || {
                        view! {
                            <button class="btn btn--secondary" on:click=move |_| confirming.set(true)>
                                "Reset"
                            </button>
                        }
                    }
                >
                    <p>"Are you sure? This could be a destructive action."</p>
                    <button class="btn btn--secondary" on:click=move |_| confirming.set(false)>
                        "Cancel"
                    </button>
                    <button class="btn btn--error" on:click=on_reset>
                        "Reset"
                    </button>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="api-key__error">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
