//! Chat panel: header, close control, message list, composer.

use leptos::prelude::*;

use crate::bridge::ChatClient;
use crate::transcript::Transcript;

use super::{Composer, MessageList};

/// Panel shown and hidden by the launcher.
///
/// The close control only flips visibility; in-flight requests keep running
/// and their outcomes still land in the message list.
#[component]
pub fn ChatPanel(
    /// Panel visibility.
    open: RwSignal<bool>,
    /// Shared transcript.
    transcript: RwSignal<Transcript>,
    /// Bridge to the chat backend.
    client: ChatClient,
) -> impl IntoView {
    view! {
        <div
            id="lnc-chatbot-panel"
            style:display=move || if open.get() { "block" } else { "none" }
        >
            <div id="lnc-chatbot-header">
                <div>"Navigation Assistant"</div>
                <button
                    id="lnc-chatbot-close"
                    type="button"
                    on:click=move |_| open.set(false)
                >
                    "\u{2715}"
                </button>
            </div>

            <MessageList transcript=transcript />

            <Composer transcript=transcript client=client />
        </div>
    }
}
