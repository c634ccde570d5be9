//! Site-wide navigation bar.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::User;
use crate::router::host::assign_location;
use crate::routes::{HOME_PATH, LOGIN_PATH, USER_PATH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub text: &'static str,
    pub href: &'static str,
}

pub const HOME: NavLink = NavLink { text: "Home", href: "/" };
pub const DOCS: NavLink = NavLink { text: "Documentation", href: "/docs" };
pub const PRICING: NavLink = NavLink { text: "Pricing", href: "/pricing" };

/// Right-hand account control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginSlot {
    #[default]
    Enabled,
    /// Shown on the login/register pages themselves.
    Disabled,
    Logout,
    /// Link to the user panel labelled with the account email.
    Panel(String),
}

impl LoginSlot {
    pub fn for_user(user: Option<&User>) -> Self {
        user.map_or(Self::Enabled, |u| Self::Panel(u.email.clone()))
    }
}

#[component]
pub fn TopBar(links: Vec<NavLink>, #[prop(optional)] login: LoginSlot) -> impl IntoView {
    let source_url = crate::config::config().source_url.clone();

    let account = match login {
        LoginSlot::Panel(email) => view! { <a class="btn btn--primary" href=USER_PATH>{email}</a> }.into_any(),
        LoginSlot::Logout => view! {
            <button
                class="btn btn--error"
                on:click=move |_| {
                    api::logout();
                    assign_location(HOME_PATH);
                }
            >
                "Log Out"
            </button>
        }
        .into_any(),
        LoginSlot::Enabled => view! { <a class="btn btn--primary" href=LOGIN_PATH>"Login"</a> }.into_any(),
        LoginSlot::Disabled => view! {
            <button class="btn btn--primary" disabled=true>
                "Login"
            </button>
        }
        .into_any(),
    };

    view! {
        <header class="top-bar">
            <nav class="top-bar__related">
                <div class="top-bar__logo">
                    <img src="/logo.png" alt="logo"/>
                    <span>"RlARndG"</span>
                </div>
                {links.into_iter().map(|link| view! { <a href=link.href>{link.text}</a> }).collect_view()}
                <a href=source_url>"Source"</a>
            </nav>
            <nav class="top-bar__external">
                <a href="https://rustlang-es.org/">"RustLangEs"</a>
                <a href="https://discord.gg/4ng5HgmaMg">"Discord"</a>
                {account}
            </nav>
        </header>
    }
}
