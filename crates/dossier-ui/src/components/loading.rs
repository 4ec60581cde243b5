//! Loading Screen Component
//!
//! Full-screen radar sweep with a status message, shown while the page
//! holds its content back.

use dioxus::prelude::*;

/// Properties for the Loading component
#[derive(Clone, PartialEq, Props)]
pub struct LoadingProps {
    /// Message under the spinner
    #[props(into)]
    pub message: String,
}

/// Full-screen loading indicator
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Loading { message: "Accessing Classified Files" }
/// }
/// ```
#[component]
pub fn Loading(props: LoadingProps) -> Element {
    rsx! {
        div {
            class: "loading-screen",
            role: "status",
            "aria-live": "polite",
            div { class: "loading-radar",
                div { class: "loading-radar__sweep" }
                div { class: "loading-radar__blip" }
            }
            p { class: "loading-message",
                "{props.message}"
                span { class: "loading-dots", "..." }
            }
        }
    }
}
