//! Message composer form.

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::bridge::ChatClient;
use crate::transcript::{Message, Transcript, UNAVAILABLE_TEXT};

/// Input plus submit control.
///
/// Submission is synchronous up to the network call: the field is cleared
/// and the "You" entry appended before the request is spawned. Nothing
/// guards against concurrent submissions; replies land in completion order.
#[component]
pub fn Composer(
    /// Shared transcript.
    transcript: RwSignal<Transcript>,
    /// Bridge to the chat backend.
    client: ChatClient,
) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(input) = input_ref.get() else {
            return;
        };
        // Whitespace-only input: consume the event, touch nothing.
        let Some(message) = sanitize(&input.value()) else {
            return;
        };
        input.set_value("");

        transcript.update(|t| t.push(Message::user(message.clone())));

        let client = client.clone();
        spawn_local(async move {
            let entry = match client.send(&message).await {
                Ok(reply) => Message::bot(reply.reply, reply.links),
                Err(err) => {
                    tracing::error!(error = %err, "chat request failed");
                    Message::bot(UNAVAILABLE_TEXT, Vec::new())
                }
            };
            transcript.update(|t| t.push(entry));
        });
    };

    view! {
        <form id="lnc-chatbot-form" on:submit=on_submit>
            <input
                id="lnc-chatbot-input"
                type="text"
                placeholder="Ask: hours, library card, printing..."
                node_ref=input_ref
            />
            <button type="submit">"Send"</button>
        </form>
    }
}

/// Trimmed submission text, or `None` for the empty no-op.
fn sanitize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_trims_and_keeps_content() {
        assert_eq!(sanitize("  hours?  "), Some("hours?".to_owned()));
        assert_eq!(sanitize("hours?"), Some("hours?".to_owned()));
    }

    #[test]
    fn sanitize_rejects_empty_and_whitespace() {
        assert_eq!(sanitize(""), None);
        assert_eq!(sanitize("   "), None);
        assert_eq!(sanitize("\n\t"), None);
    }
}
