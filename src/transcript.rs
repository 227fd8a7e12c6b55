//! Append-only transcript model.
//!
//! Plain data with no DOM or signal types, so the ordering and one-shot
//! greeting rules are testable off-browser. The UI layer wraps a
//! [`Transcript`] in a reactive signal and re-renders on every append.

use serde::Deserialize;

/// Greeting appended exactly once, on the first panel open.
pub const WELCOME_TEXT: &str = "Hi! Ask me about hours, printing, events, or library cards.";

/// Fixed reply shown when the backend cannot be reached.
pub const UNAVAILABLE_TEXT: &str = "Chat service unavailable.";

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The person typing into the composer.
    You,
    /// The navigation backend (or the widget speaking on its behalf).
    Bot,
}

impl Role {
    /// Label rendered in front of the message text.
    pub fn label(self) -> &'static str {
        match self {
            Self::You => "You",
            Self::Bot => "Bot",
        }
    }
}

/// A link the backend attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    /// Target URL.
    pub url: String,
    /// Optional display title.
    #[serde(default)]
    pub title: Option<String>,
}

impl Link {
    /// Visible label, falling back to the URL when the title is absent or
    /// empty.
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .filter(|title| !title.is_empty())
            .unwrap_or(&self.url)
    }
}

/// One displayed chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Author of the entry.
    pub role: Role,
    /// Message body, always rendered as plain text.
    pub text: String,
    /// Links rendered after the body.
    pub links: Vec<Link>,
}

impl Message {
    /// An outbound user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::You,
            text: text.into(),
            links: Vec::new(),
        }
    }

    /// A backend (or widget-generated) reply.
    pub fn bot(text: impl Into<String>, links: Vec<Link>) -> Self {
        Self {
            role: Role::Bot,
            text: text.into(),
            links,
        }
    }
}

/// Ordered, append-only log of exchanged messages.
///
/// Entries are never mutated or removed and the log grows for the lifetime
/// of the page. The greeting flag lives here as explicit state rather than
/// as a marker attribute on a DOM node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<Message>,
    welcome_shown: bool,
}

impl Transcript {
    /// An empty transcript with the greeting still pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    /// Append one entry.
    pub fn push(&mut self, message: Message) {
        self.entries.push(message);
    }

    /// Append the greeting if it has not been shown yet.
    ///
    /// Returns whether an entry was appended; every later call is a no-op.
    pub fn welcome(&mut self) -> bool {
        if self.welcome_shown {
            return false;
        }
        self.welcome_shown = true;
        self.push(Message::bot(WELCOME_TEXT, Vec::new()));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_appends_exactly_once() {
        let mut transcript = Transcript::new();

        assert!(transcript.welcome());
        assert!(!transcript.welcome());
        assert!(!transcript.welcome());

        assert_eq!(transcript.entries().len(), 1);
        let greeting = &transcript.entries()[0];
        assert_eq!(greeting.role, Role::Bot);
        assert_eq!(greeting.text, WELCOME_TEXT);
        assert!(greeting.links.is_empty());
    }

    #[test]
    fn entries_keep_append_order() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("hours?"));
        transcript.push(Message::bot("Try floor 2", Vec::new()));
        transcript.push(Message::user("thanks"));

        let roles: Vec<_> = transcript.entries().iter().map(|m| m.role).collect();
        assert_eq!(roles, [Role::You, Role::Bot, Role::You]);
    }

    #[test]
    fn role_labels() {
        assert_eq!(Role::You.label(), "You");
        assert_eq!(Role::Bot.label(), "Bot");
    }

    #[test]
    fn link_label_falls_back_to_url() {
        let untitled = Link {
            url: "https://x/y".into(),
            title: None,
        };
        assert_eq!(untitled.label(), "https://x/y");

        let blank_title = Link {
            url: "https://x/y".into(),
            title: Some(String::new()),
        };
        assert_eq!(blank_title.label(), "https://x/y");

        let titled = Link {
            url: "https://x/y".into(),
            title: Some("Floor plan".into()),
        };
        assert_eq!(titled.label(), "Floor plan");
    }
}
