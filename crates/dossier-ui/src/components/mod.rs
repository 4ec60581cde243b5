//! Reusable UI components
//!
//! Everything here is stateless apart from the click callback on the theme
//! switch. Classes are styled by the global stylesheet.

mod background;
mod error_fallback;
mod loading;
mod not_found;
mod section_title;
mod status_indicator;
mod theme_switch;

pub use background::*;
pub use error_fallback::*;
pub use loading::*;
pub use not_found::*;
pub use section_title::*;
pub use status_indicator::*;
pub use theme_switch::*;

#[cfg(test)]
pub(crate) mod test_support {
    use dioxus::prelude::*;

    /// Render a root component to an HTML string
    pub fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus::ssr::render(&dom)
    }
}
