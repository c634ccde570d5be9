//! Interactive endpoint card for the documentation page.
//!
//! Shows the method and full URL, lets the reader edit query parameters and
//! fires a real request, printing the status line and body.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use leptos::prelude::*;

use crate::net::api::{self, is_success};

/// An editable query parameter.
#[derive(Clone, Copy, Debug)]
pub struct QueryParam {
    pub name: &'static str,
    pub default: &'static str,
    /// Returns a hint when the current value is invalid.
    pub validate: Option<fn(&str) -> Option<&'static str>>,
}

impl QueryParam {
    pub fn error_for(&self, value: &str) -> Option<&'static str> {
        self.validate.and_then(|check| check(value))
    }
}

/// Join base, path and the non-empty query values into a request URL.
pub fn build_request_url(base: &str, path: &str, query: &[(String, String)]) -> String {
    let pairs: Vec<String> = query
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect();

    let mut url = if path.starts_with("http") { path.to_owned() } else { format!("{base}{path}") };
    if !pairs.is_empty() {
        url.push('?');
        url.push_str(&pairs.join("&"));
    }
    url
}

/// Render a response body for display. Successful bodies are JSON and get
/// pretty-printed; error bodies are plain text messages and stay as sent.
pub fn format_body(body: &str, status: u16) -> String {
    if !is_success(status) {
        return body.to_owned();
    }
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| body.to_owned())
}

/// Origin requests are sent to: the configured API base, else the page origin.
fn request_base() -> String {
    let base = &crate::config::config().api_base;
    if !base.is_empty() {
        return base.clone();
    }
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

#[component]
pub fn Endpoint(
    method: &'static str,
    path: &'static str,
    #[prop(optional)] query: Vec<QueryParam>,
) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let values = RwSignal::new(
        query
            .iter()
            .map(|param| (param.name.to_owned(), param.default.to_owned()))
            .collect::<Vec<_>>(),
    );
    let status = RwSignal::new(None::<(u16, String)>);
    let result = RwSignal::new(None::<String>);
    let base = request_base();
    let url = Memo::new(move |_| build_request_url(&base, path, &values.get()));

    let on_send = move |_| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::try_endpoint(&url.get_untracked()).await {
                Ok(resp) => {
                    result.set(Some(format_body(&resp.body, resp.status)));
                    status.set(Some((resp.status, resp.status_text)));
                }
                Err(e) => {
                    status.set(None);
                    result.set(Some(e.user_message()));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        result.set(Some(api::ApiError::Unavailable.user_message()));
    };

    let params = query
        .into_iter()
        .enumerate()
        .map(|(index, param)| {
            let current = move || values.with(|v| v.get(index).map(|(_, value)| value.clone()).unwrap_or_default());
            view! {
                <div class="endpoint__param">
                    <label>{param.name}</label>
                    <input
                        prop:value=current
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            values.update(|v| {
                                if let Some(entry) = v.get_mut(index) {
                                    entry.1 = value;
                                }
                            });
                        }
                    />
                    <span class="endpoint__param-error">{move || param.error_for(&current()).unwrap_or_default()}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="endpoint">
            <div class="endpoint__main">
                <label data-method=method>{method}</label>
                <input readonly=true prop:value=move || url.get()/>
            </div>
            <button
                class=move || if expanded.get() { "btn btn--secondary" } else { "btn btn--primary" }
                on:click=move |_| expanded.update(|open| *open = !*open)
            >
                {move || if expanded.get() { "Show less" } else { "Show more" }}
            </button>
            <div class="endpoint__details" class:hidden=move || !expanded.get()>
                <span>
                    <b>"Query parameters"</b>
                </span>
                <div class="endpoint__query">{params}</div>
                <button class="btn btn--primary" on:click=on_send>
                    "Send"
                </button>
                <Show when=move || status.get().is_some()>
                    <p class="endpoint__status">
                        {move || status.get().map(|(code, text)| format!("{code} {text}")).unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || result.get().is_some()>
                    <pre class="endpoint__result">{move || result.get().unwrap_or_default()}</pre>
                </Show>
            </div>
        </div>
    }
}
