//! Login page.

use leptos::prelude::*;

use crate::components::top_bar::{DOCS, HOME, LoginSlot, PRICING, TopBar};
use crate::pages::credentials::{CredentialsForm, CredentialsMode};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <TopBar links=vec![HOME, DOCS, PRICING] login=LoginSlot::Disabled/>
        <CredentialsForm mode=CredentialsMode::Login/>
    }
}
