//! Static page footer.

use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-content",
                p { class: "footer-mission", "🍝 🍷 🍰" }
                p { class: "footer-text",
                    "This message will self-destruct in... just kidding. See you at dinner!"
                }
                div { class: "footer-stamp",
                    span { "APPROVED" }
                }
            }
        }
    }
}
