//! Catch-all route: every path other than `/`.

use dioxus::prelude::*;
use dossier_ui::NotFound;

use crate::app::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    tracing::debug!("No route for /{}", segments.join("/"));

    rsx! {
        main { class: "not-found-page",
            NotFound {}
            Link { class: "btn-return", to: Route::Home {}, "Return to headquarters" }
        }
    }
}
