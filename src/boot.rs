//! Wasm entry point: read the host configuration and mount the widget.

use leptos::mount::mount_to_body;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::WidgetConfig;
use crate::ui::ChatWidget;

/// Mount the widget at the end of the host page's `<body>`.
pub fn mount(config: WidgetConfig) {
    mount_to_body(move || view! { <ChatWidget config=config /> });
}

/// Auto-boot when the wasm module loads, mirroring script-tag usage: the
/// host page sets `LNC_CONFIG` before loading the bundle. A missing backend
/// URL logs a diagnostic and produces no DOM at all.
#[wasm_bindgen(start)]
fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    match WidgetConfig::from_global() {
        Ok(config) => mount(config),
        Err(err) => tracing::error!(error = %err, "chat widget not mounted"),
    }
}
