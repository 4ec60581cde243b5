//! Home page - the invitation itself.
//!
//! Opens behind a fixed loading gate, then renders every section in a fixed
//! order from the injected content.

use std::sync::Arc;

use dioxus::prelude::*;
use dossier_core::{Content, LoadPhase, Theme, Timings};
use dossier_ui::{GridBackground, Loading, SectionTitle, ThemeSwitch};

use crate::components::{AgentCard, BriefingGrid, CriteriaGrid, Footer, Hero, MissionDetails};
use crate::context::{use_app_config, use_theme};

/// Message on the loading screen
pub const LOADING_MESSAGE: &str = "Accessing Classified Files";

/// Home page component.
///
/// `Loading → Ready` once the gate timer fires; never back.
#[component]
pub fn Home() -> Element {
    let config = use_app_config();
    let mut theme = use_theme();
    let timings = config.timings;
    let mut phase = use_signal(|| timings.initial_phase());

    let gate = use_hook(move || {
        let mounted = tokio::time::Instant::now();
        spawn(async move {
            if !phase.peek().is_loading() {
                return;
            }
            tokio::time::sleep_until(mounted + timings.loading_gate).await;
            let elapsed = mounted.elapsed();
            if !timings.phase_at(elapsed).is_loading() {
                phase.with_mut(LoadPhase::finish);
                tracing::debug!("Loading gate opened after {:?}", elapsed);
            }
        })
    });
    use_drop(move || gate.cancel());

    if phase().is_loading() {
        return rsx! {
            Loading { message: LOADING_MESSAGE }
        };
    }

    let current_theme = theme.current();

    rsx! {
        MissionPage {
            content: config.content.clone(),
            timings,
            image_dir: config.image_dir.clone(),
            theme: current_theme,
            on_toggle_theme: move |_| theme.toggle(),
        }
    }
}

/// Properties for the MissionPage component
#[derive(Clone, PartialEq, Props)]
pub struct MissionPageProps {
    pub content: Arc<Content>,
    pub timings: Timings,
    #[props(into)]
    pub image_dir: String,
    pub theme: Theme,
    pub on_toggle_theme: EventHandler<()>,
}

/// The fully revealed page. Pure function of its props.
#[component]
pub fn MissionPage(props: MissionPageProps) -> Element {
    let page = &props.content.page;
    let roster = &props.content.roster;
    let timings = props.timings;

    rsx! {
        div { class: "app",
            div { class: "theme-switch-container",
                ThemeSwitch {
                    theme: props.theme,
                    on_toggle: move |_| props.on_toggle_theme.call(()),
                    size: 28,
                }
            }

            GridBackground {}

            Hero {
                mission_code: page.mission_code.clone(),
                title: page.title.clone(),
                subtitle: page.subtitle.clone(),
                tagline: page.tagline.clone(),
            }

            MissionDetails { mission: page.current_mission.clone() }

            section { class: "agents-section",
                SectionTitle { title: "THE OPERATIVES" }
                div { class: "agents-grid",
                    for (index, agent) in roster.iter().enumerate() {
                        AgentCard {
                            key: "{agent.id}",
                            agent: agent.clone(),
                            index,
                            timings,
                            image_dir: props.image_dir.clone(),
                        }
                    }
                }
            }

            BriefingGrid { sections: page.sections.clone() }

            CriteriaGrid {
                criteria: page.sections.rating_criteria.criteria.clone(),
                timings,
            }

            Footer {}
        }
    }
}
