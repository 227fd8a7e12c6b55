//! Embeddable library-navigation chat widget.
//!
//! A floating "Need help finding something?" button that opens a small chat
//! panel, relays questions to the navigation backend over HTTP, and renders
//! replies with optional page links.
//!
//! # Architecture
//!
//! - **Config**: validated backend URL + API key, read once at mount
//! - **Transcript**: append-only message log with a one-shot greeting
//! - **Bridge**: `reqwest`-based client for the backend `/chat` endpoint
//! - **UI**: Leptos CSR components mounted into the host page
//!
//! The crate builds as a `cdylib` for the browser bundle and as an `rlib` so
//! everything except the DOM layer stays testable with plain `cargo test`.
//!
//! # Modules
//!
//! - [`config`]: widget configuration and validation
//! - [`transcript`]: message model and one-shot greeting state
//! - [`bridge`]: HTTP client for the chat endpoint
//! - [`ui`]: Leptos components

pub mod bridge;
pub mod config;
pub mod transcript;
pub mod ui;

#[cfg(target_arch = "wasm32")]
mod boot;

#[cfg(target_arch = "wasm32")]
pub use boot::mount;
pub use config::{ConfigError, WidgetConfig};
