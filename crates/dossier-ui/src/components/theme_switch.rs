//! Theme Switch Component
//!
//! Round icon button that flips between the light and dark themes.
//! The current theme is owned by the caller; this component only reports clicks.

use dioxus::prelude::*;
use dossier_core::Theme;

/// Properties for the ThemeSwitch component
#[derive(Clone, PartialEq, Props)]
pub struct ThemeSwitchProps {
    /// Theme currently applied to the page
    pub theme: Theme,
    /// Called once per click
    pub on_toggle: EventHandler<()>,
    /// Icon size in pixels
    #[props(default = 28)]
    pub size: u32,
}

/// Glyph shown for a theme: the sun offers daylight, the moon offers night
pub fn theme_glyph(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    }
}

/// Theme toggle button
///
/// # Example
///
/// ```rust,ignore
/// let mut theme = use_signal(Theme::default);
///
/// rsx! {
///     ThemeSwitch {
///         theme: theme(),
///         on_toggle: move |_| theme.set(theme().toggled()),
///         size: 28,
///     }
/// }
/// ```
#[component]
pub fn ThemeSwitch(props: ThemeSwitchProps) -> Element {
    let target = props.theme.toggled();
    let glyph = theme_glyph(props.theme);
    let size = props.size;
    // Button is a little larger than the glyph
    let box_size = size + size / 2;

    rsx! {
        button {
            class: "theme-switch theme-switch--{props.theme}",
            r#type: "button",
            "aria-label": "Switch to {target} theme",
            title: "Switch to {target} theme",
            style: "width: {box_size}px; height: {box_size}px; font-size: {size}px;",
            onclick: move |_| {
                tracing::debug!("Theme switch clicked, requesting {}", target);
                props.on_toggle.call(());
            },
            span { class: "theme-switch__glyph", "{glyph}" }
        }
    }
}
