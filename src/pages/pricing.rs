//! Pricing overview. Purchasing happens outside this client.

use leptos::prelude::*;

use crate::components::top_bar::{DOCS, HOME, LoginSlot, TopBar};
use crate::net::types::User;

#[component]
pub fn PricingPage(user: Option<User>) -> impl IntoView {
    let signed_in = user.is_some();

    view! {
        <TopBar links=vec![HOME, DOCS] login=LoginSlot::for_user(user.as_ref())/>
        <div class="pricing">
            <h1>"Pricing"</h1>
            <div class="pricing__plans">
                <section class="pricing__plan">
                    <h2>"Free"</h2>
                    <p>"No account needed. One request every ten seconds."</p>
                </section>
                <section class="pricing__plan">
                    <h2>"API key"</h2>
                    <p>"Requests signed with a key are not rate limited. Keys are managed from your user panel."</p>
                    {if signed_in {
                        view! { <a class="btn btn--primary" href="/user">"Go to your panel"</a> }.into_any()
                    } else {
                        view! { <a class="btn btn--primary" href="/register">"Create an account"</a> }.into_any()
                    }}
                </section>
            </div>
        </div>
    }
}
