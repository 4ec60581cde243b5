//! Application context for Dinner Dossier.
//!
//! `main` builds one [`AppConfig`] and injects it through the launch builder.
//! Components read it with [`use_app_config`]; nothing is kept in statics.
//!
//! ## Usage
//!
//! ```ignore
//! // In any component below App
//! let config = use_app_config();
//! let mut theme = use_theme();
//!
//! rsx! {
//!     ThemeSwitch { theme: theme.current(), on_toggle: move |_| theme.toggle() }
//! }
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use dossier_core::{Content, Preferences, Theme, Timings};

/// Default directory agent images are resolved against
pub const DEFAULT_IMAGE_DIR: &str = "assets/agents";

/// Read-only configuration for the whole page.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Page and roster documents, loaded once
    pub content: Arc<Content>,
    pub timings: Timings,
    pub image_dir: String,
    /// Where the theme is persisted; `None` disables persistence
    pub preferences_path: Option<PathBuf>,
    /// Theme applied on first render
    pub initial_theme: Theme,
}

/// Hook to access the injected configuration.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Current theme plus a toggle that persists the choice.
#[derive(Clone)]
pub struct UseTheme {
    theme: Signal<Theme>,
    preferences_path: Option<PathBuf>,
}

impl UseTheme {
    pub fn current(&self) -> Theme {
        (self.theme)()
    }

    /// Flip the theme and write it to the preference file.
    ///
    /// A failed write is logged and otherwise ignored.
    pub fn toggle(&mut self) {
        let next = self.theme.peek().toggled();
        self.theme.set(next);
        tracing::info!("Theme switched to {}", next);

        if let Some(path) = &self.preferences_path {
            if let Err(e) = (Preferences { theme: next }).save(path) {
                tracing::warn!("Failed to persist theme: {}", e);
            }
        }
    }
}

/// Hook to read and toggle the theme.
///
/// The theme signal itself is provided by `App`.
pub fn use_theme() -> UseTheme {
    let theme = use_context::<Signal<Theme>>();
    let preferences_path = use_app_config().preferences_path;
    UseTheme {
        theme,
        preferences_path,
    }
}
