//! Section heading flanked by two decorative rules.

use dioxus::prelude::*;

#[component]
pub fn SectionTitle(
    /// Heading text, rendered as-is
    #[props(into)]
    title: String,
) -> Element {
    rsx! {
        h2 { class: "section-title",
            span { class: "title-line" }
            "{title}"
            span { class: "title-line" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render;

    #[test]
    fn renders_title_between_lines() {
        fn app() -> Element {
            rsx! { SectionTitle { title: "THE OPERATIVES" } }
        }

        let html = render(app);
        assert!(html.contains("THE OPERATIVES"));
        assert_eq!(html.matches("title-line").count(), 2);
    }
}
