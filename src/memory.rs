//! In-memory capability implementations.
//!
//! Used by the unit tests and by any host that renders without a browser.
//! Each type records what the controller did so callers can assert on it.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::host::{PreferenceStore, Readiness, SystemScheme, ThemeDom};

// =============================================================
// Storage
// =============================================================

/// Key/value store that can be switched to "unavailable".
#[derive(Debug)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    available: Cell<bool>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self { values: RefCell::new(HashMap::new()), available: Cell::new(true) }
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Store that reads nothing and rejects every write.
    #[must_use]
    pub fn unavailable() -> Self {
        let store = Self::new();
        store.available.set(false);
        store
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    /// Raw stored value, regardless of availability.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        if !self.available.get() {
            return None;
        }
        self.get(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        if !self.available.get() {
            return Err(ThemeError::Storage(format!("cannot write {key}: storage unavailable")));
        }
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================
// System scheme
// =============================================================

/// System scheme with a settable answer. Every query gets the same answer.
#[derive(Debug, Default)]
pub struct FixedScheme {
    matches: Cell<bool>,
    evaluations: Cell<usize>,
}

impl FixedScheme {
    /// System that prefers light (the light query matches).
    #[must_use]
    pub fn prefers_light() -> Self {
        Self { matches: Cell::new(true), evaluations: Cell::new(0) }
    }

    /// System that does not prefer light.
    #[must_use]
    pub fn prefers_dark() -> Self {
        Self::default()
    }

    pub fn set_matches(&self, matches: bool) {
        self.matches.set(matches);
    }

    /// Number of times the query has been evaluated.
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.evaluations.get()
    }
}

impl SystemScheme for FixedScheme {
    fn matches(&self, _query: &str) -> bool {
        self.evaluations.set(self.evaluations.get() + 1);
        self.matches.get()
    }
}

// =============================================================
// DOM
// =============================================================

type ClickHandler = Rc<dyn Fn()>;

/// Root class list plus a flat set of elements by id.
#[derive(Default)]
pub struct MemoryDom {
    root_classes: RefCell<BTreeSet<String>>,
    /// Element id -> visibility (`None` until first set).
    elements: RefCell<HashMap<String, Option<bool>>>,
    handlers: RefCell<HashMap<String, Vec<ClickHandler>>>,
}

impl MemoryDom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// DOM containing the elements with the given ids.
    #[must_use]
    pub fn with_elements(ids: &[&str]) -> Self {
        let dom = Self::new();
        for id in ids {
            dom.add_element(id);
        }
        dom
    }

    /// DOM with the toggle button and both icons named by `config`.
    #[must_use]
    pub fn page(config: &ThemeConfig) -> Self {
        let (light_icon, dark_icon) = config.icon_ids();
        Self::with_elements(&[config.toggle_id.as_str(), light_icon, dark_icon])
    }

    pub fn add_element(&self, id: &str) {
        self.elements.borrow_mut().entry(id.to_owned()).or_insert(None);
    }

    /// Add a class to the root, as page markup or another script might.
    pub fn add_root_class(&self, class: &str) {
        self.root_classes.borrow_mut().insert(class.to_owned());
    }

    #[must_use]
    pub fn root_classes(&self) -> Vec<String> {
        self.root_classes.borrow().iter().cloned().collect()
    }

    #[must_use]
    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.borrow().contains(class)
    }

    /// Visibility of `id`; `None` if the element is absent or never styled.
    #[must_use]
    pub fn visibility(&self, id: &str) -> Option<bool> {
        self.elements.borrow().get(id).copied().flatten()
    }

    #[must_use]
    pub fn handler_count(&self, id: &str) -> usize {
        self.handlers.borrow().get(id).map_or(0, Vec::len)
    }

    /// Dispatch a click on `id`. Returns the number of handlers invoked.
    pub fn click(&self, id: &str) -> usize {
        let handlers = self.handlers.borrow().get(id).cloned().unwrap_or_default();
        for handler in &handlers {
            handler();
        }
        handlers.len()
    }
}

impl ThemeDom for MemoryDom {
    fn set_root_classes(&self, remove: &[&str], add: &str) -> Result<(), ThemeError> {
        let mut classes = self.root_classes.borrow_mut();
        for class in remove {
            classes.remove(*class);
        }
        classes.insert(add.to_owned());
        Ok(())
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    fn set_visible(&self, id: &str, visible: bool) -> Result<(), ThemeError> {
        match self.elements.borrow_mut().get_mut(id) {
            Some(slot) => {
                *slot = Some(visible);
                Ok(())
            }
            None => Err(ThemeError::Dom(format!("no element #{id}"))),
        }
    }

    fn on_click(&self, id: &str, handler: Box<dyn Fn()>) -> Result<bool, ThemeError> {
        if !self.has_element(id) {
            return Ok(false);
        }
        self.handlers.borrow_mut().entry(id.to_owned()).or_default().push(Rc::from(handler));
        Ok(true)
    }
}

// =============================================================
// Readiness
// =============================================================

/// Ready signal fired by hand. Callbacks queue until [`Self::fire`].
#[derive(Default)]
pub struct ManualReadiness {
    ready: Cell<bool>,
    pending: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl ManualReadiness {
    /// Document still loading.
    #[must_use]
    pub fn loading() -> Self {
        Self::default()
    }

    /// Document already loaded; callbacks run immediately.
    #[must_use]
    pub fn ready() -> Self {
        Self { ready: Cell::new(true), pending: RefCell::new(Vec::new()) }
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Mark the document ready and run queued callbacks in order.
    pub fn fire(&self) {
        self.ready.set(true);
        let pending = std::mem::take(&mut *self.pending.borrow_mut());
        for callback in pending {
            callback();
        }
    }
}

impl Readiness for ManualReadiness {
    fn when_ready(&self, callback: Box<dyn FnOnce()>) {
        if self.ready.get() {
            callback();
        } else {
            self.pending.borrow_mut().push(callback);
        }
    }
}
