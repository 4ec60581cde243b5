//! Status Indicator Component
//!
//! Pulsing dot followed by a status label, e.g. an agent's "ACTIVE".

use dioxus::prelude::*;

/// Properties for the StatusIndicator component
#[derive(Clone, PartialEq, Props)]
pub struct StatusIndicatorProps {
    #[props(into)]
    pub label: String,
}

/// Displays a status label with a pulsing indicator
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatusIndicator { label: "ON ASSIGNMENT" }
/// }
/// ```
#[component]
pub fn StatusIndicator(props: StatusIndicatorProps) -> Element {
    rsx! {
        div { class: "agent-status",
            span {
                class: "status-dot",
                // ARIA for screen readers
                role: "img",
                "aria-label": "Status",
            }
            span { class: "status-label", "{props.label}" }
        }
    }
}
