//! Browser capabilities and the WASM entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that touches `web-sys`. It adapts `localStorage`,
//! `matchMedia`, the document tree and `DOMContentLoaded` to the traits in
//! [`crate::host`], then hands them to a [`ThemeController`]. JS exceptions are
//! converted into [`ThemeError`] values; nothing here throws back into JS.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, Storage, Window};

use crate::config::{CONFIG_ATTRIBUTE, ThemeConfig};
use crate::controller::ThemeController;
use crate::error::ThemeError;
use crate::host::{PreferenceStore, Readiness, SystemScheme, ThemeDom};

/// Controller wired to the real browser.
pub type BrowserController = ThemeController<LocalStorage, MediaQueryScheme, BrowserDom>;

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

// =============================================================
// localStorage
// =============================================================

/// `window.localStorage`, resolved once. Missing or blocked storage (privacy
/// modes, sandboxed frames) reads as empty and fails on write.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {}", js_error(&err));
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key} failed: {}", js_error(&err));
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let storage = self.storage.as_ref().ok_or(ThemeError::Unavailable("localStorage"))?;
        storage.set_item(key, value).map_err(|err| ThemeError::Storage(js_error(&err)))
    }
}

// =============================================================
// matchMedia
// =============================================================

pub struct MediaQueryScheme {
    window: Window,
}

impl MediaQueryScheme {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl SystemScheme for MediaQueryScheme {
    fn matches(&self, query: &str) -> bool {
        match self.window.match_media(query) {
            Ok(Some(list)) => list.matches(),
            Ok(None) => false,
            Err(err) => {
                log::warn!("matchMedia({query}) failed: {}", js_error(&err));
                false
            }
        }
    }
}

// =============================================================
// Document
// =============================================================

pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn root(&self) -> Result<Element, ThemeError> {
        self.document.document_element().ok_or(ThemeError::Unavailable("document element"))
    }
}

impl ThemeDom for BrowserDom {
    fn set_root_classes(&self, remove: &[&str], add: &str) -> Result<(), ThemeError> {
        let classes = self.root()?.class_list();
        for class in remove {
            classes.remove_1(class).map_err(|err| ThemeError::Dom(js_error(&err)))?;
        }
        classes.add_1(add).map_err(|err| ThemeError::Dom(js_error(&err)))
    }

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn set_visible(&self, id: &str, visible: bool) -> Result<(), ThemeError> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| ThemeError::Dom(format!("no element #{id}")))?;
        let element = element
            .dyn_into::<HtmlElement>()
            .map_err(|_| ThemeError::Dom(format!("#{id} is not an HTML element")))?;
        element
            .style()
            .set_property("display", if visible { "block" } else { "none" })
            .map_err(|err| ThemeError::Dom(js_error(&err)))
    }

    fn on_click(&self, id: &str, handler: Box<dyn Fn()>) -> Result<bool, ThemeError> {
        let Some(element) = self.document.get_element_by_id(id) else {
            return Ok(false);
        };
        let closure = Closure::wrap(Box::new(move |_event: Event| handler()) as Box<dyn FnMut(Event)>);
        element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|err| ThemeError::Dom(js_error(&err)))?;
        // Listener lives as long as the page.
        closure.forget();
        Ok(true)
    }
}

// =============================================================
// DOMContentLoaded
// =============================================================

pub struct DomReadiness {
    document: Document,
}

impl DomReadiness {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Readiness for DomReadiness {
    fn when_ready(&self, callback: Box<dyn FnOnce()>) {
        if self.document.ready_state() != "loading" {
            callback();
            return;
        }
        let listener = Closure::once_into_js(move || callback());
        let listener: &js_sys::Function = listener.unchecked_ref();
        if let Err(err) = self.document.add_event_listener_with_callback("DOMContentLoaded", listener) {
            log::error!("cannot wait for DOMContentLoaded: {}", js_error(&err));
        }
    }
}

// =============================================================
// Entry point
// =============================================================

/// Install the console logger. Everything is enabled until the page config
/// is read, so config warnings are visible.
fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_err() {
        log::debug!("logger already installed");
    }
}

/// Build the browser controller and schedule initialization.
///
/// # Errors
///
/// Returns [`ThemeError::Unavailable`] outside a browser window.
pub fn install() -> Result<Rc<BrowserController>, ThemeError> {
    init_logging();
    let window = web_sys::window().ok_or(ThemeError::Unavailable("window"))?;
    let document = window.document().ok_or(ThemeError::Unavailable("document"))?;

    let raw = document.document_element().and_then(|root| root.get_attribute(CONFIG_ATTRIBUTE));
    let config = ThemeConfig::from_attribute(raw.as_deref());
    log::set_max_level(config.log_level);

    let controller = Rc::new(ThemeController::new(
        config,
        LocalStorage::new(&window),
        MediaQueryScheme::new(window),
        BrowserDom::new(document.clone()),
    ));
    Rc::clone(&controller).start(&DomReadiness::new(document));
    Ok(controller)
}

/// WASM start hook.
#[wasm_bindgen(start)]
pub fn run() {
    if let Err(err) = install() {
        log::error!("theme toggle not installed: {err}");
    }
}
