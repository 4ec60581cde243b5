//! Assessment criteria grid with staggered entrance animation.

use dioxus::prelude::*;
use dossier_core::{Criterion, Timings};
use dossier_ui::SectionTitle;

#[component]
pub fn CriteriaGrid(criteria: Vec<Criterion>, #[props(default)] timings: Timings) -> Element {
    rsx! {
        section { class: "criteria-section",
            SectionTitle { title: "ASSESSMENT CRITERIA" }

            div { class: "criteria-grid",
                for (idx, criterion) in criteria.iter().enumerate() {
                    div {
                        key: "{idx}",
                        class: "criterion-card",
                        style: timings.criterion_style(idx),
                        div { class: "criterion-icon", "{criterion.icon}" }
                        h3 { "{criterion.name}" }
                        p { "{criterion.description}" }
                    }
                }
            }
        }
    }
}
