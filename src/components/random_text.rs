//! Animated pseudorandom number ticker.

use leptos::prelude::*;

use crate::util::ticker::{Ticker, TickerFormat};

#[cfg(feature = "csr")]
const TICK: std::time::Duration = std::time::Duration::from_millis(500);

#[component]
pub fn RandomText(format: TickerFormat) -> impl IntoView {
    let ticker = Ticker::new(format);
    let text = RwSignal::new(ticker.text());

    #[cfg(feature = "csr")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        let mut ticker = ticker;
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(TICK).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                text.set(ticker.tick(&mut js_sys::Math::random));
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="random-text">
            <span class="random-text__prefix">{format.prefix()}</span>
            <span class="random-text__value">{move || text.get()}</span>
        </div>
    }
}
