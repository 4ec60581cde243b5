use dioxus::prelude::*;
use dossier_core::Theme;
use dossier_ui::ErrorFallback;

use crate::context::use_app_config;
use crate::pages::{Home, PageNotFound};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The invitation page
/// - anything else - Not-found view
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, the theme signal, the error boundary and routing.
#[component]
pub fn App() -> Element {
    let config = use_app_config();
    let theme: Signal<Theme> = use_context_provider(|| Signal::new(config.initial_theme));

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "theme-root", "data-theme": theme().as_str(),
            ErrorBoundary {
                handle_error: |errors: ErrorContext| {
                    let message = errors
                        .errors()
                        .iter()
                        .map(|e| e.to_string())
                        .collect::<Vec<_>>()
                        .join("; ");
                    tracing::error!("Render error: {}", message);
                    rsx! {
                        ErrorFallback { message }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::sync::Arc;

    use dioxus::history::{provide_history_context, MemoryHistory};
    use dossier_core::{Content, Timings};
    use dossier_ui::NOT_FOUND_TITLE;

    use super::*;
    use crate::context::AppConfig;

    fn app_at(path: &'static str) -> Element {
        use_context_provider(|| AppConfig {
            content: Arc::new(Content::embedded().unwrap()),
            timings: Timings::without_intro(),
            image_dir: "assets/agents".to_string(),
            preferences_path: None,
            initial_theme: Theme::Dark,
        });
        use_hook(|| provide_history_context(Rc::new(MemoryHistory::with_initial_path(path))));
        rsx! { App {} }
    }

    fn render_path(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus::ssr::render(&dom)
    }

    #[test]
    fn root_path_is_home() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home {});
    }

    #[test]
    fn unknown_path_is_not_found() {
        let route = "/nonexistent".parse::<Route>().unwrap();
        assert_eq!(
            route,
            Route::PageNotFound {
                segments: vec!["nonexistent".to_string()]
            }
        );
        assert_ne!(route, Route::Home {});
    }

    #[test]
    fn nested_unknown_path_is_not_found() {
        let route = "/agents/007/dossier".parse::<Route>().unwrap();
        assert!(matches!(route, Route::PageNotFound { segments } if segments.len() == 3));
    }

    #[tokio::test]
    async fn unknown_path_renders_not_found_view() {
        let html = render_path(|| app_at("/nonexistent"));
        assert!(html.contains(NOT_FOUND_TITLE));
        assert!(html.contains("btn-return"));
        assert!(!html.contains("THE OPERATIVES"));
    }

    #[tokio::test]
    async fn root_path_renders_invitation() {
        let html = render_path(|| app_at("/"));
        assert!(html.contains("THE OPERATIVES"));
        assert!(!html.contains(NOT_FOUND_TITLE));
    }
}
