//! Surveillance Grid Background
//!
//! Fixed, non-interactive layer behind the page: a faint grid plus a
//! horizontal scan line sweeping down the screen.

use dioxus::prelude::*;

/// Grid cell size in pixels
const GRID_CELL: u32 = 40;
/// Opacity of the grid lines
const GRID_OPACITY: f32 = 0.08;

/// Decorative background layer
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     GridBackground {}
///     section { class: "hero", /* ... */ }
/// }
/// ```
#[component]
pub fn GridBackground() -> Element {
    rsx! {
        div { class: "background-pattern", "aria-hidden": "true",
            div {
                class: "grid-overlay",
                style: "background-size: {GRID_CELL}px {GRID_CELL}px; opacity: {GRID_OPACITY};",
            }
            div { class: "scan-effect" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render;

    #[test]
    fn renders_grid_and_scan_line() {
        fn app() -> Element {
            rsx! { GridBackground {} }
        }

        let html = render(app);
        assert!(html.contains("background-size: 40px 40px"));
        assert!(html.contains("opacity: 0.08"));
        assert!(html.contains("scan-effect"));
    }
}
