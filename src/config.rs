//! Page contract: storage key, root classes, element ids and media query.
//!
//! SYSTEM CONTEXT
//! ==============
//! The defaults match the markup emitted by the site templates. A page can
//! override any field by putting a JSON object in the root element's
//! `data-theme-config` attribute; absent fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::theme::Theme;

/// Attribute on the root element that may carry a JSON config override.
pub const CONFIG_ATTRIBUTE: &str = "data-theme-config";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub storage_key: String,
    pub light_class: String,
    pub dark_class: String,
    /// Id of the toggle button.
    pub toggle_id: String,
    pub light_icon_id: String,
    pub dark_icon_id: String,
    /// Media query whose match means the system prefers light.
    pub light_media_query: String,
    pub log_level: LevelFilter,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            light_class: "theme-light".to_owned(),
            dark_class: "theme-dark".to_owned(),
            toggle_id: "theme-toggle".to_owned(),
            light_icon_id: "theme-icon-light".to_owned(),
            dark_icon_id: "theme-icon-dark".to_owned(),
            light_media_query: "(prefers-color-scheme: light)".to_owned(),
            log_level: LevelFilter::Info,
        }
    }
}

impl ThemeConfig {
    /// Parse an override object. Missing fields fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] if `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Config for a page whose root carries `raw` in [`CONFIG_ATTRIBUTE`].
    /// Absent or invalid overrides yield the defaults; invalid ones are
    /// logged at `warn`.
    #[must_use]
    pub fn from_attribute(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring {CONFIG_ATTRIBUTE}: {err}");
                Self::default()
            }
        }
    }

    /// Root class for `theme`.
    #[must_use]
    pub fn class_for(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => self.light_class.as_str(),
            Theme::Dark => self.dark_class.as_str(),
        }
    }

    /// Both root classes, in `[light, dark]` order.
    #[must_use]
    pub fn theme_classes(&self) -> [&str; 2] {
        [self.light_class.as_str(), self.dark_class.as_str()]
    }

    /// Icon ids, in `(light, dark)` order.
    #[must_use]
    pub fn icon_ids(&self) -> (&str, &str) {
        (self.light_icon_id.as_str(), self.dark_icon_id.as_str())
    }
}
