//! Hero section: mission badge, glitch title and the "access granted" prompt.

use dioxus::prelude::*;

#[component]
pub fn Hero(
    /// Code shown in the badge above the title
    mission_code: String,
    title: String,
    subtitle: String,
    tagline: String,
) -> Element {
    rsx! {
        section { class: "hero",
            div { class: "mission-badge",
                span { class: "badge-text", "{mission_code}" }
            }

            h1 { class: "main-title",
                // data-text feeds the ::before/::after glitch layers
                span { class: "glitch", "data-text": "{title}", "{title}" }
            }

            p { class: "subtitle", "{subtitle}" }
            p { class: "tagline", "{tagline}" }

            div { class: "access-granted",
                div { class: "typing-effect",
                    span { "ACCESS GRANTED" }
                    span { class: "cursor", "_" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> Element {
        rsx! {
            Hero {
                mission_code: "OP-7".to_string(),
                title: "DOSSIER".to_string(),
                subtitle: "sub".to_string(),
                tagline: "tag".to_string(),
            }
        }
    }

    #[test]
    fn glitch_layer_mirrors_title() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus::ssr::render(&dom);

        assert!(html.contains("data-text=\"DOSSIER\""));
        assert!(html.contains("OP-7"));
        assert!(html.contains("ACCESS GRANTED"));
    }
}
