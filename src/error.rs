//! Error type for host failures.
//!
//! Missing optional elements are not errors; these variants cover storage,
//! DOM and configuration faults reported by the environment.

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("dom error: {0}")]
    Dom(String),
    #[error("invalid theme config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("browser environment unavailable: {0}")]
    Unavailable(&'static str),
}
