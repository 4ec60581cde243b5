//! Current Mission Details
//!
//! Exactly three cards: host & location, theme & attire, and the menu.

use dioxus::prelude::*;
use dossier_core::CurrentMission;
use dossier_ui::SectionTitle;

#[component]
pub fn MissionDetails(mission: CurrentMission) -> Element {
    let location = &mission.location;
    let previous = &mission.previous_mission;
    let menu = &mission.menu;

    rsx! {
        section { class: "mission-details-section",
            SectionTitle { title: "CURRENT MISSION DETAILS" }

            div { class: "mission-details-grid",
                MissionCard { heading: "🎩 HOST & LOCATION",
                    InfoRow { label: "Mission Commander:", value: mission.host.clone() }
                    InfoRow { label: "Mission Number:", value: format!("#{}", mission.mission_number) }
                    div { class: "location-info",
                        h4 { "{location.venue}" }
                        p { "{location.address}" }
                        p { "{location.city}" }
                        p { class: "coordinates", "{location.coordinates}" }
                    }
                }

                MissionCard { heading: "🎭 THEME & ATTIRE",
                    InfoRow { label: "Mission Theme:", value: mission.theme.clone() }
                    div { class: "dress-code",
                        h4 { "Dress Code" }
                        p { class: "dress-code-text", "{mission.dress_code}" }
                    }
                    div { class: "previous-mission",
                        h4 { "Previous Mission" }
                        p {
                            strong { "{previous.host}" }
                        }
                        p { "Theme: {previous.theme}" }
                        p { class: "status", "{previous.status}" }
                    }
                }

                MissionCard { heading: menu.title.clone(),
                    div { class: "menu-items",
                        for (idx, item) in menu.items.iter().enumerate() {
                            div { key: "{idx}", class: "menu-item",
                                span { class: "course", "{item.course}:" }
                                span { class: "dish", "{item.dish}" }
                            }
                        }
                    }
                    div { class: "menu-note",
                        p { "⚠️ {menu.note}" }
                    }
                }
            }
        }
    }
}

/// Card shell with a header line
#[component]
fn MissionCard(#[props(into)] heading: String, children: Element) -> Element {
    rsx! {
        div { class: "mission-card",
            div { class: "mission-card-header",
                h3 { "{heading}" }
            }
            div { class: "mission-card-content", {children} }
        }
    }
}

#[component]
fn InfoRow(#[props(into)] label: String, #[props(into)] value: String) -> Element {
    rsx! {
        div { class: "mission-info-row",
            span { class: "label", "{label}" }
            span { class: "value", "{value}" }
        }
    }
}
