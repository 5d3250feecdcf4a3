//! Light/dark theme toggle for static pages.
//!
//! This crate is compiled to WebAssembly and loaded by every page of the site.
//! On start it applies the persisted theme (or the system color-scheme
//! preference when nothing valid is stored), shows the matching toggle icon,
//! and wires the toggle button. All decisions live in a browser-free
//! controller so they can be tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The two-valued [`theme::Theme`] and its string forms |
//! | [`config`] | Storage key, class names, element ids and media query |
//! | [`controller`] | [`controller::ThemeController`]: preference, apply, toggle, init |
//! | [`host`] | Capability traits the controller is written against |
//! | [`memory`] | In-memory capabilities for tests and non-browser hosts |
//! | [`error`] | [`error::ThemeError`] |
//! | `web` | `web-sys` capabilities and the WASM start hook (feature `hydrate`) |

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod memory;
pub mod theme;
#[cfg(feature = "hydrate")]
pub mod web;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use theme::Theme;
