//! Mission Briefing grid
//!
//! Always four cards, in the order of [`BriefingKind::ALL`], whatever order
//! the page document lists its sections in.

use dioxus::prelude::*;
use dossier_core::{BriefingKind, Section, Sections};
use dossier_ui::SectionTitle;

#[component]
pub fn BriefingGrid(sections: Sections) -> Element {
    rsx! {
        section { class: "briefing-section",
            SectionTitle { title: "MISSION BRIEFING" }

            div { class: "briefing-grid",
                for (kind, section) in sections.briefings() {
                    BriefingCard { key: "{kind:?}", kind, section: section.clone() }
                }
            }
        }
    }
}

#[component]
fn BriefingCard(kind: BriefingKind, section: Section) -> Element {
    rsx! {
        div { class: "briefing-card", "data-briefing": kind.key(),
            div { class: "card-header",
                h3 { "{section.title}" }
                span { class: "card-icon", {kind.icon()} }
            }
            ul { class: "briefing-list",
                for (idx, point) in section.points.iter().enumerate() {
                    li { key: "{idx}",
                        span { class: "bullet", "▸" }
                        "{point}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dossier_core::RatingCriteria;

    use super::*;

    fn section(title: &str, points: usize) -> Section {
        Section {
            title: title.to_string(),
            points: (0..points).map(|i| format!("{} #{}", title, i)).collect(),
        }
    }

    fn app() -> Element {
        let sections = Sections {
            how_it_works: section("how", 2),
            dates_and_times: section("dates", 1),
            important_bits: section("important", 3),
            unwritten_rules: section("rules", 0),
            rating_criteria: RatingCriteria { criteria: vec![] },
        };
        rsx! { BriefingGrid { sections } }
    }

    #[test]
    fn four_cards_in_fixed_order() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus::ssr::render(&dom);

        assert_eq!(html.matches("class=\"briefing-card\"").count(), 4);
        let positions: Vec<usize> = BriefingKind::ALL
            .iter()
            .map(|k| html.find(&format!("data-briefing=\"{}\"", k.key())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        // One bullet per point, empty sections still get a card
        assert_eq!(html.matches("class=\"bullet\"").count(), 6);
    }
}
