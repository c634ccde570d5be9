//! Landing page: pitch, number tickers and how the generator works.

use leptos::prelude::*;

use crate::components::random_text::RandomText;
use crate::components::top_bar::{DOCS, LoginSlot, PRICING, TopBar};
use crate::net::api;
use crate::net::types::{RandomKind, User};
use crate::util::ticker::TickerFormat;

/// One real value from the API, so visitors see what a response holds.
#[component]
fn LiveSample(kind: RandomKind) -> impl IntoView {
    let sample = LocalResource::new(move || api::fetch_random(kind));

    view! {
        <div class="landing__sample">
            <code>{kind.endpoint()}</code>
            <Suspense fallback=move || view! { <span>"..."</span> }>
                {move || {
                    sample.get()
                        .map(|result| match result {
                            Ok(value) => view! { <span>{value.display_value()}</span> }.into_any(),
                            Err(e) => {
                                log::debug!("landing sample unavailable: {e}");
                                view! { <span class="landing__sample-error">{e.user_message()}</span> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
pub fn LandingPage(user: Option<User>) -> impl IntoView {
    view! {
        <TopBar links=vec![DOCS, PRICING] login=LoginSlot::for_user(user.as_ref())/>
        <div class="landing">
            <section class="landing__title">
                <div>
                    <h1>"RlARndG, an actual (not pseudo) random number generator."</h1>
                    <div>
                        <a class="btn btn--primary" href="/pricing">"Get started"</a>
                        <a class="btn btn--secondary" href="/docs">"Documentation"</a>
                    </div>
                </div>
                <div>
                    <RandomText format=TickerFormat::Hex/>
                    <RandomText format=TickerFormat::Decimal/>
                    <RandomText format=TickerFormat::Binary/>
                    <span class="landing__disclaimer">"*The displayed numbers are pseudorandom."</span>
                    <LiveSample kind=RandomKind::Unsigned/>
                </div>
            </section>
            <section class="landing__how">
                <h1>"How does this work?"</h1>
                <div class="image-display">
                    <img src="/times-square.jpg" alt="crowded place"/>
                    <p>
                        "Cameras in undisclosed crowded places capture scenes that never repeat. "
                        "Nobody can predict what thousands of people are doing at the same time."
                    </p>
                </div>
                <div class="image-display">
                    <img src="/rust-snippet.png" alt="rust snippet"/>
                    <p>"A Rust service grabs a frame from one of the cameras and derives a number from the image bits."</p>
                </div>
                <div class="image-display">
                    <img src="/http-server.png" alt="http server"/>
                    <p>"An HTTP API serves those numbers as JSON for other developers to use."</p>
                </div>
            </section>
            <section class="landing__questions">
                <h1>"Have any questions?"</h1>
                <p>
                    "Join the RustLangEs community. It is a Spanish-speaking community with English "
                    "channels, and we offer support for this service along with any coding questions."
                </p>
                <a class="btn btn--primary" href="https://discord.gg/4ng5HgmaMg">"Join the Discord"</a>
            </section>
        </div>
    }
}
