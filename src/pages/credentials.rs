//! Email + password form shared by the login and register pages.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use leptos::prelude::*;

use crate::net::types::Credentials;

pub const MISSING_FIELDS: &str = "Please fill both fields.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialsMode {
    Login,
    Register,
}

impl CredentialsMode {
    fn title(self) -> &'static str {
        match self {
            Self::Login => "Login to your account",
            Self::Register => "Register a new account",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    /// Prompt, link text and href pointing at the other form.
    fn alternate(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Login => ("Don't have an account? ", "register", crate::routes::REGISTER_PATH),
            Self::Register => ("Have an account? ", "login", crate::routes::LOGIN_PATH),
        }
    }
}

/// Trim the email and require both fields.
///
/// # Errors
///
/// Returns `MISSING_FIELDS` when either field is blank.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn CredentialsForm(mode: CredentialsMode) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = match mode {
                CredentialsMode::Login => crate::net::api::login(&credentials).await,
                CredentialsMode::Register => crate::net::api::register(&credentials).await,
            };
            match result {
                Ok(user) => {
                    log::info!("signed in as {}", user.email);
                    crate::router::host::assign_location(crate::routes::USER_PATH);
                }
                Err(e) => {
                    error.set(e.user_message());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            busy.set(false);
        }
    };

    let (prompt, link_text, link_href) = mode.alternate();

    view! {
        <form class="login-container" on:submit=on_submit>
            <h1>{mode.title()}</h1>
            <div>
                <label for="email">"Email"</label>
                <input
                    id="email"
                    placeholder="you@email.tld"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    placeholder="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </div>
            <div class="login-info">
                <span class="login-error">{move || error.get()}</span>
                <p>{prompt} <a href=link_href>{link_text}</a></p>
            </div>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {mode.submit_label()}
            </button>
        </form>
    }
}
