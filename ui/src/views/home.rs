use dioxus::prelude::*;

use crate::config::nav_config;

#[component]
pub fn Home() -> Element {
    let services = &nav_config().services;

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("page-home-title")} }
            p { {crate::t!("page-home-intro")} }
        }
        // Anchor targets for the header's same-page links.
        section { id: "services", class: "page page-section",
            h2 { {crate::t!("page-services-title")} }
            p { {crate::t!("page-services-intro")} }
            ul { class: "page-section__cards",
                for card in services.iter() {
                    li { key: "{card.name}",
                        h3 { "{card.name}" }
                        p { "{card.description}" }
                    }
                }
            }
        }
        section { id: "about", class: "page page-section",
            h2 { {crate::t!("page-about-title")} }
            p { {crate::t!("page-about-intro")} }
        }
    }
}
