//! Documentation page listing the random-value endpoints.

#[cfg(test)]
#[path = "docs_test.rs"]
mod docs_test;

use leptos::prelude::*;

use crate::components::endpoint::{Endpoint, QueryParam};
use crate::components::top_bar::{HOME, LoginSlot, PRICING, TopBar};
use crate::net::types::{ColorFormat, RandomKind, User};

/// Hint shown when the color `format` parameter is not understood.
fn color_format_error(value: &str) -> Option<&'static str> {
    if value.is_empty() || ColorFormat::parse(value).is_some() {
        None
    } else {
        Some("Expected either rgb or hex.")
    }
}

const DEFAULT_COLOR: ColorFormat = ColorFormat::Rgb;

const COLOR_FORMAT: QueryParam =
    QueryParam { name: "format", default: DEFAULT_COLOR.as_str(), validate: Some(color_format_error) };

struct DocEntry {
    title: &'static str,
    summary: &'static str,
    kind: RandomKind,
    query: &'static [QueryParam],
}

const ENTRIES: &[DocEntry] = &[
    DocEntry {
        title: "Unsigned integer",
        summary: "A random unsigned 32-bit integer.",
        kind: RandomKind::Unsigned,
        query: &[],
    },
    DocEntry {
        title: "Signed integer",
        summary: "A random signed 32-bit integer.",
        kind: RandomKind::Signed,
        query: &[],
    },
    DocEntry {
        title: "Boolean",
        summary: "A random true or false value.",
        kind: RandomKind::Boolean,
        query: &[],
    },
    DocEntry {
        title: "Color",
        summary: "A random color, as an rgb object or a hex string.",
        kind: RandomKind::Color(DEFAULT_COLOR),
        query: &[COLOR_FORMAT],
    },
];

#[component]
pub fn DocsPage(user: Option<User>) -> impl IntoView {
    let entries = ENTRIES
        .iter()
        .map(|entry| {
            view! {
                <section class="docs__entry">
                    <h2>{entry.title}</h2>
                    <p>{entry.summary}</p>
                    <Endpoint
                        method="GET"
                        path=entry.kind.path()
                        query=entry.query.to_vec()
                    />
                </section>
            }
        })
        .collect_view();

    view! {
        <TopBar links=vec![HOME, PRICING] login=LoginSlot::for_user(user.as_ref())/>
        <div class="docs">
            <h1>"API documentation"</h1>
            <p>
                "Every endpoint answers with "
                <code>"{ author, timestamp, value }"</code>
                ". Requests without an API key are rate limited."
            </p>
            {entries}
        </div>
    }
}
