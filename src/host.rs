//! Capabilities the controller needs from its environment.
//!
//! ARCHITECTURE
//! ============
//! The controller never touches `window`, `document` or `localStorage`
//! directly. Browser implementations live in `web` (feature `hydrate`);
//! in-memory ones live in `memory` and back the unit tests. All methods take
//! `&self` because the controller is shared between the ready callback and
//! the click handler on a single thread.

use crate::error::ThemeError;

/// Key/value persistence for the theme preference.
pub trait PreferenceStore {
    /// Read `key`. Unreadable storage is reported as `None`, the same as an
    /// absent key.
    fn load(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage is unavailable or rejects the write.
    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// System color-scheme evaluation. Evaluated on every call, never cached.
pub trait SystemScheme {
    /// Whether the media `query` currently matches.
    fn matches(&self, query: &str) -> bool;
}

/// The slice of the DOM the controller reads and writes.
pub trait ThemeDom {
    /// Remove every class in `remove` from the root element, then add `add`.
    ///
    /// # Errors
    ///
    /// Returns an error if the root element is missing or rejects the change.
    fn set_root_classes(&self, remove: &[&str], add: &str) -> Result<(), ThemeError>;

    /// Whether an element with `id` exists.
    fn has_element(&self, id: &str) -> bool;

    /// Show (`display: block`) or hide (`display: none`) the element `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is missing or its style cannot be set.
    fn set_visible(&self, id: &str, visible: bool) -> Result<(), ThemeError>;

    /// Attach `handler` to clicks on element `id`. Returns `false` if there is
    /// no such element.
    ///
    /// # Errors
    ///
    /// Returns an error if the element exists but the listener cannot be added.
    fn on_click(&self, id: &str, handler: Box<dyn Fn()>) -> Result<bool, ThemeError>;
}

/// One-shot "document is ready" signal.
pub trait Readiness {
    /// Run `callback` now if the document is ready, otherwise once it becomes
    /// ready.
    fn when_ready(&self, callback: Box<dyn FnOnce()>);
}
