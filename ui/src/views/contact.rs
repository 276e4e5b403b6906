use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { class: "page page-contact",
            h1 { {crate::t!("page-contact-title")} }
            p { {crate::t!("page-contact-intro")} }
        }
    }
}
