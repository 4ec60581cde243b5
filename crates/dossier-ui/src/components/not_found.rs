//! Not Found view, rendered for every unknown route.

use dioxus::prelude::*;

pub const NOT_FOUND_TITLE: &str = "MISSION NOT FOUND";

#[component]
pub fn NotFound() -> Element {
    rsx! {
        section { class: "not-found",
            div { class: "not-found__code", "404" }
            h1 { class: "not-found__title", "{NOT_FOUND_TITLE}" }
            p { class: "not-found__text",
                "This file has been redacted, shredded, or never existed."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render;

    #[test]
    fn renders_code_and_title() {
        fn app() -> Element {
            rsx! { NotFound {} }
        }

        let html = render(app);
        assert!(html.contains("404"));
        assert!(html.contains(NOT_FOUND_TITLE));
    }
}
