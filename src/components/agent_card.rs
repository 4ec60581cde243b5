//! Agent Card - flip card for one roster entry.
//!
//! Front: clearance badge, portrait, status, name and codename.
//! Back: classified dossier with stat bars, specialties and motto.
//! Cards fade in one after another; a click flips them.

use dioxus::prelude::*;
use dossier_core::{AgentRecord, CardState, Timings};
use dossier_ui::StatusIndicator;

use crate::context::DEFAULT_IMAGE_DIR;

/// Props for the agent card component.
#[derive(Props, Clone, PartialEq)]
pub struct AgentCardProps {
    pub agent: AgentRecord,
    /// Zero-based display position; only drives the entrance delay
    pub index: usize,
    #[props(default)]
    pub timings: Timings,
    #[props(default = DEFAULT_IMAGE_DIR.to_string(), into)]
    pub image_dir: String,
}

#[component]
pub fn AgentCard(props: AgentCardProps) -> Element {
    let mut state = use_signal(CardState::default);

    // One-shot reveal, cancelled if the card goes away first
    let delay = props.timings.entrance_delay(props.index);
    let agent_id = props.agent.id.clone();
    let reveal = use_hook(move || {
        spawn(async move {
            tokio::time::sleep(delay).await;
            state.with_mut(CardState::reveal);
            tracing::trace!(agent = %agent_id, "Agent card revealed");
        })
    });
    use_drop(move || reveal.cancel());

    let agent = &props.agent;
    let class = state.read().class();
    let image_src = agent.image_src(&props.image_dir);

    rsx! {
        div {
            class: "{class}",
            "data-agent-id": "{agent.id}",
            onclick: move |_| state.with_mut(CardState::toggle_flip),
            div { class: "card-inner",
                // Front
                div { class: "card-front",
                    div { class: "classification-badge", "{agent.clearance_level}" }
                    div { class: "agent-image-container",
                        img {
                            class: "agent-image",
                            src: "{image_src}",
                            alt: "{agent.name}",
                        }
                        div { class: "image-overlay",
                            div { class: "scan-line" }
                        }
                    }
                    div { class: "agent-info",
                        StatusIndicator { label: agent.status.clone() }
                        h3 { class: "agent-name", "{agent.name}" }
                        p { class: "agent-codename", "\"{agent.codename}\"" }
                        p { class: "agent-classification", "{agent.classification}" }
                        div { class: "tap-hint",
                            span { "TAP FOR INTEL" }
                        }
                    }
                }

                // Back
                div { class: "card-back",
                    div { class: "dossier-header",
                        h3 { "CLASSIFIED DOSSIER" }
                        p { class: "agent-id", "ID: {agent.id}" }
                    }

                    div { class: "stats-container",
                        for stat in agent.stats.iter() {
                            div { key: "{stat.name}", class: "stat-bar",
                                div { class: "stat-label",
                                    span { {stat.label()} }
                                    span { class: "stat-value", "{stat.value}" }
                                }
                                div { class: "stat-progress",
                                    div { class: "stat-fill", style: stat.fill_style() }
                                }
                            }
                        }
                    }

                    div { class: "specialties",
                        h4 { "SPECIALTIES" }
                        div { class: "specialty-tags",
                            for (idx, specialty) in agent.specialties.iter().enumerate() {
                                span { key: "{idx}", class: "tag", "{specialty}" }
                            }
                        }
                    }

                    div { class: "motto",
                        p { "\"{agent.motto}\"" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::rc::Rc;
    use std::time::Duration;

    use dioxus::dioxus_core::{ElementId, NoOpMutations};
    use dioxus::html::{
        set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
    };
    use dossier_core::{Stat, StatSheet};

    use super::*;

    fn agent(stats: Vec<Stat>, specialties: Vec<&str>) -> AgentRecord {
        AgentRecord {
            id: "AGT-042".to_string(),
            name: "Ada Quill".to_string(),
            codename: "Cipher".to_string(),
            classification: "Analyst".to_string(),
            clearance_level: "TOP SECRET".to_string(),
            status: "ACTIVE".to_string(),
            image: "ada.jpg".to_string(),
            stats: StatSheet::new(stats),
            specialties: specialties.into_iter().map(String::from).collect(),
            motto: "Trust, but decrypt.".to_string(),
        }
    }

    fn render_card(app: fn() -> Element) -> (VirtualDom, String) {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus::ssr::render(&dom);
        (dom, html)
    }

    fn stat_card() -> Element {
        rsx! {
            AgentCard {
                agent: agent(vec![Stat::new("A", 80), Stat::new("B", 40)], vec!["lockpicking", "tiramisu"]),
                index: 0,
            }
        }
    }

    fn bare_card() -> Element {
        rsx! {
            AgentCard { agent: agent(vec![], vec![]), index: 2 }
        }
    }

    fn fourth_card() -> Element {
        rsx! {
            AgentCard { agent: agent(vec![], vec![]), index: 3 }
        }
    }

    fn card_removed_before_reveal() -> Element {
        let mut shown = use_signal(|| true);
        use_hook(|| {
            spawn(async move {
                tokio::time::sleep(Duration::from_millis(100)).await;
                shown.set(false);
            })
        });

        if shown() {
            rsx! {
                AgentCard { agent: agent(vec![], vec![]), index: 3 }
            }
        } else {
            rsx! {
                div { "gone" }
            }
        }
    }

    /// Dispatch a click on the card root, the first element the dom mounts
    fn click_card(dom: &mut VirtualDom) -> String {
        let event = Event::new(
            Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
            true,
        );
        dom.runtime().handle_event("click", event, ElementId(1));
        dom.render_immediate(&mut NoOpMutations);
        dioxus::ssr::render(dom)
    }

    #[tokio::test]
    async fn stat_widths_follow_values_in_order() {
        let (_dom, html) = render_card(stat_card);

        let a = html.find("width: 80%").expect("A bar");
        let b = html.find("width: 40%").expect("B bar");
        assert!(a < b, "bars keep stat order");
        assert_eq!(html.matches("stat-bar").count(), 2);
        assert_eq!(html.matches("class=\"tag\"").count(), 2);
    }

    #[tokio::test]
    async fn front_and_back_content() {
        let (_dom, html) = render_card(stat_card);

        assert!(html.contains("TOP SECRET"));
        assert!(html.contains("Cipher"));
        assert!(html.contains("TAP FOR INTEL"));
        assert!(html.contains("CLASSIFIED DOSSIER"));
        assert!(html.contains("ID: AGT-042"));
        assert!(html.contains("src=\"assets/agents/ada.jpg\""));
        assert!(html.contains("&quot;Cipher&quot;"));
        assert!(html.contains("&quot;Trust, but decrypt.&quot;"));
    }

    #[tokio::test]
    async fn empty_stats_and_specialties_render_nothing() {
        let (_dom, html) = render_card(bare_card);

        assert!(!html.contains("stat-bar"));
        assert!(!html.contains("class=\"tag\""));
        assert!(html.contains("SPECIALTIES"));
    }

    #[tokio::test]
    async fn card_starts_hidden_and_unflipped() {
        let (_dom, html) = render_card(stat_card);
        assert!(html.contains("class=\"spy-card\""));
    }

    #[tokio::test(start_paused = true)]
    async fn card_reveals_after_its_stagger() {
        let start = tokio::time::Instant::now();
        let (mut dom, html) = render_card(fourth_card);
        assert!(!html.contains("spy-card visible"));

        for _ in 0..20 {
            if dioxus::ssr::render(&dom).contains("spy-card visible") {
                break;
            }
            dom.wait_for_work().await;
            dom.render_immediate(&mut NoOpMutations);
        }

        assert!(dioxus::ssr::render(&dom).contains("spy-card visible"));
        assert!(start.elapsed() >= Duration::from_millis(600));
    }

    #[tokio::test]
    async fn clicks_alternate_between_faces() {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let (mut dom, html) = render_card(bare_card);
        assert!(!html.contains("flipped"));

        let html = click_card(&mut dom);
        assert!(html.contains("flipped"), "one click shows the back");

        let html = click_card(&mut dom);
        assert!(!html.contains("flipped"), "two clicks return to the front");

        let html = click_card(&mut dom);
        assert!(html.contains("flipped"), "three clicks show the back");
    }

    #[tokio::test(start_paused = true)]
    async fn removed_card_never_reveals() {
        let (mut dom, _) = render_card(card_removed_before_reveal);

        for _ in 0..20 {
            if dioxus::ssr::render(&dom).contains("gone") {
                break;
            }
            dom.wait_for_work().await;
            dom.render_immediate(&mut NoOpMutations);
        }
        assert!(dioxus::ssr::render(&dom).contains("gone"));

        // Well past the 600 ms reveal; the cancelled task must not wake the dom
        tokio::time::advance(Duration::from_millis(1000)).await;
        let pending = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        assert!(pending.is_err(), "no work left after unmount");

        dom.render_immediate(&mut NoOpMutations);
        let html = dioxus::ssr::render(&dom);
        assert!(html.contains("gone"));
        assert!(!html.contains("spy-card"));
    }
}
