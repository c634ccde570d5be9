//! User panel: account summary, API keys and log out.

use leptos::prelude::*;

use crate::components::api_key::ApiKeyRow;
use crate::components::top_bar::{DOCS, HOME, LoginSlot, PRICING, TopBar};
use crate::net::api;
use crate::net::types::User;

#[component]
pub fn UserPanelPage(user: User) -> impl IntoView {
    let keys = LocalResource::new(|| api::fetch_key_ids());

    view! {
        <TopBar links=vec![HOME, DOCS, PRICING] login=LoginSlot::Logout/>
        <div class="user-panel">
            <h1>"Welcome back"</h1>
            <p class="user-panel__email">{user.email}</p>
            <h2>"Your API keys"</h2>
            <Suspense fallback=move || view! { <p>"Loading keys..."</p> }>
                {move || {
                    keys.get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! {
                                    <p>
                                        "You have no API keys yet. See "
                                        <a href="/pricing">"pricing"</a>
                                        " to get one."
                                    </p>
                                }
                                    .into_any()
                            }
                            Ok(list) => {
                                list.into_iter()
                                    .enumerate()
                                    .map(|(i, key)| view! { <ApiKeyRow id=key.id number={i + 1}/> })
                                    .collect_view()
                                    .into_any()
                            }
                            Err(e) => {
                                log::warn!("failed to load api keys: {e}");
                                view! { <p class="user-panel__error">{e.user_message()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
