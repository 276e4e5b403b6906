use dioxus::prelude::*;

use crate::core::route::HOME_PATH;

/// Catch-all page. `segments` is the unmatched path, as split by the router.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "page page-not-found",
            h1 { {crate::t!("page-not-found-title")} }
            p { code { "{path}" } }
            Link { to: HOME_PATH, {crate::t!("page-not-found-back")} }
        }
    }
}
