//! Theme preference controller.
//!
//! DESIGN
//! ======
//! The effective theme is re-derived from storage (then the system media
//! query) on every read; the controller keeps the last applied theme only for
//! display via [`ThemeController::current`]. Toggling therefore flips what is
//! persisted, not what is in memory.
//!
//! Applying a theme sets the root classes, persists, then updates the icons.
//! A failed storage write leaves the new root class in place and the icons
//! as they were.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::host::{PreferenceStore, Readiness, SystemScheme, ThemeDom};
use crate::theme::Theme;

/// Reads, applies and toggles the page theme through injected capabilities.
pub struct ThemeController<S, M, D> {
    config: ThemeConfig,
    store: S,
    system: M,
    dom: D,
    current: Cell<Option<Theme>>,
}

impl<S, M, D> ThemeController<S, M, D>
where
    S: PreferenceStore,
    M: SystemScheme,
    D: ThemeDom,
{
    #[must_use]
    pub fn new(config: ThemeConfig, store: S, system: M, dom: D) -> Self {
        Self { config, store, system, dom, current: Cell::new(None) }
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn system(&self) -> &M {
        &self.system
    }

    #[must_use]
    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Theme most recently applied by this controller, if any.
    #[must_use]
    pub fn current(&self) -> Option<Theme> {
        self.current.get()
    }

    /// Effective theme: the stored value if it is exactly `"light"` or
    /// `"dark"`, otherwise the system preference.
    #[must_use]
    pub fn preference(&self) -> Theme {
        if let Some(theme) = self.store.load(&self.config.storage_key).as_deref().and_then(Theme::parse) {
            return theme;
        }
        let theme = Theme::from_prefers_light(self.system.matches(&self.config.light_media_query));
        log::debug!("no stored theme, using system preference: {theme}");
        theme
    }

    /// Apply `theme` to the root element, persist it, then update the icons.
    ///
    /// # Errors
    ///
    /// Returns an error if the root classes cannot be updated, the preference
    /// cannot be written, or an icon style cannot be set.
    pub fn set_theme(&self, theme: Theme) -> Result<(), ThemeError> {
        self.dom.set_root_classes(&self.config.theme_classes(), self.config.class_for(theme))?;
        self.current.set(Some(theme));
        self.store.save(&self.config.storage_key, theme.as_str())?;
        self.update_icon(theme)?;
        log::debug!("applied theme: {theme}");
        Ok(())
    }

    /// Flip the effective theme and apply the result. Returns the new theme.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Self::set_theme`].
    pub fn toggle_theme(&self) -> Result<Theme, ThemeError> {
        let next = self.preference().toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    /// Show the icon for switching away from `theme`: light theme shows the
    /// dark icon, dark theme shows the light icon. No-op unless both icons
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing icon's style cannot be set.
    pub fn update_icon(&self, theme: Theme) -> Result<(), ThemeError> {
        let (light_icon, dark_icon) = self.config.icon_ids();
        if !self.dom.has_element(light_icon) || !self.dom.has_element(dark_icon) {
            return Ok(());
        }
        let light_theme = theme == Theme::Light;
        self.dom.set_visible(light_icon, !light_theme)?;
        self.dom.set_visible(dark_icon, light_theme)
    }
}

impl<S, M, D> ThemeController<S, M, D>
where
    S: PreferenceStore + 'static,
    M: SystemScheme + 'static,
    D: ThemeDom + 'static,
{
    /// Apply the effective theme and wire the toggle button, if present.
    /// Returns the applied theme. The button is wired even if applying failed.
    ///
    /// # Errors
    ///
    /// Returns the [`Self::set_theme`] failure if there was one, otherwise the
    /// failure to attach the click listener. When both fail, the listener
    /// error is logged.
    pub fn init_theme(self: &Rc<Self>) -> Result<Theme, ThemeError> {
        let theme = self.preference();
        let applied = self.set_theme(theme);

        // The listener owns the controller for the rest of the page lifetime.
        let controller = Rc::clone(self);
        let handler = Box::new(move || {
            match controller.toggle_theme() {
                Ok(theme) => log::info!("theme toggled to {theme}"),
                Err(err) => log::error!("theme toggle failed: {err}"),
            }
        });
        let wired = self.dom.on_click(&self.config.toggle_id, handler);
        match (applied, wired) {
            (Err(err), Err(listener_err)) => {
                log::error!("toggle listener not attached: {listener_err}");
                Err(err)
            }
            (Err(err), Ok(_)) | (Ok(()), Err(err)) => Err(err),
            (Ok(()), Ok(wired)) => {
                if !wired {
                    log::debug!("no #{} element, toggle not wired", self.config.toggle_id);
                }
                Ok(theme)
            }
        }
    }

    /// Run [`Self::init_theme`] once `readiness` reports the document ready.
    pub fn start<R: Readiness + ?Sized>(self: Rc<Self>, readiness: &R) {
        readiness.when_ready(Box::new(move || {
            if let Err(err) = self.init_theme() {
                log::error!("theme init failed: {err}");
            }
        }));
    }
}
