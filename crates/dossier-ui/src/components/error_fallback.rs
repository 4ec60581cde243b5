//! Error Fallback Component
//!
//! Generic view shown by the application's error boundary.

use dioxus::prelude::*;

/// Properties for the ErrorFallback component
#[derive(Clone, PartialEq, Props)]
pub struct ErrorFallbackProps {
    /// Technical detail, shown in small print
    #[props(into)]
    pub message: String,
}

#[component]
pub fn ErrorFallback(props: ErrorFallbackProps) -> Element {
    rsx! {
        div { class: "error-fallback", role: "alert",
            div { class: "error-fallback__stamp", "COMPROMISED" }
            h1 { "Something went wrong in the field." }
            p { class: "error-fallback__detail", "{props.message}" }
        }
    }
}
