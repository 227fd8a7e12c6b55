//! Widget root component.

use leptos::prelude::*;

use crate::bridge::ChatClient;
use crate::config::WidgetConfig;
use crate::transcript::Transcript;

use super::{ChatPanel, Launcher};

/// The complete floating chat widget.
///
/// Owns the visibility signal and the transcript; children receive both as
/// props. The panel stays in the DOM while hidden, so replies that resolve
/// after a close still append and become visible on the next open.
#[component]
pub fn ChatWidget(
    /// Validated configuration for the backend bridge.
    config: WidgetConfig,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let transcript = RwSignal::new(Transcript::new());
    let client = ChatClient::new(&config);

    view! {
        <Launcher open=open transcript=transcript />
        <ChatPanel open=open transcript=transcript client=client />
    }
}
