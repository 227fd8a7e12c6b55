//! Widget UI components.
//!
//! Leptos components for the floating chat widget. The element ids
//! (`lnc-chatbot-*`) are the stable integration points for the host page's
//! stylesheet and must not change.

mod composer;
mod launcher;
mod message_list;
mod panel;
mod widget;

pub use composer::Composer;
pub use launcher::Launcher;
pub use message_list::MessageList;
pub use panel::ChatPanel;
pub use widget::ChatWidget;
