//! Floating launcher button.

use leptos::prelude::*;

use crate::transcript::Transcript;

/// Toggle button revealing the chat panel.
///
/// The first open appends the one-shot greeting; every later open only
/// flips visibility.
#[component]
pub fn Launcher(
    /// Panel visibility.
    open: RwSignal<bool>,
    /// Shared transcript, for the greeting.
    transcript: RwSignal<Transcript>,
) -> impl IntoView {
    let on_click = move |_| {
        open.set(true);
        transcript.update(|t| {
            t.welcome();
        });
    };

    view! {
        <button id="lnc-chatbot-button" type="button" on:click=on_click>
            "Need help finding something?"
        </button>
    }
}
