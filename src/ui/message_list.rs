//! Transcript rendering.

use leptos::prelude::*;

use crate::transcript::{Link, Message, Transcript};

/// Ordered message log.
///
/// Re-renders on every transcript change. The log is append-only and stays
/// small enough that keyed diffing buys nothing here.
#[component]
pub fn MessageList(
    /// Shared transcript.
    transcript: RwSignal<Transcript>,
) -> impl IntoView {
    view! {
        <div id="lnc-chatbot-messages">
            {move || transcript.with(|t| t.entries().iter().map(entry_view).collect_view())}
        </div>
    }
}

/// One entry: bold role label, the text as a plain text node, then any
/// links. Server-supplied text is never interpreted as markup.
fn entry_view(message: &Message) -> impl IntoView + use<> {
    let links = message.links.iter().map(link_view).collect_view();

    view! {
        <div>
            <strong>{format!("{}:", message.role.label())}</strong>
            " "
            {message.text.clone()}
        </div>
        {links}
    }
}

/// A clickable link entry, opening in a new browsing context.
fn link_view(link: &Link) -> impl IntoView + use<> {
    view! {
        <a href=link.url.clone() target="_blank" rel="noopener">
            {link.label().to_owned()}
        </a>
    }
}
