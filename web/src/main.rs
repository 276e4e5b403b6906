use dioxus::logger::tracing::{info, warn, Level};
use dioxus::prelude::*;

use ui::components::AgencyNavbar;
use ui::config::{register_config, NavConfig};
use ui::views::{Contact, Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/contact")]
    Contact {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const NAV_CONFIG_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/nav.json"));

fn load_nav_config() -> NavConfig {
    NavConfig::from_json(NAV_CONFIG_JSON).unwrap_or_else(|err| {
        warn!("assets/nav.json rejected ({err}); using built-in navbar config");
        NavConfig::default()
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    if !register_config(load_nav_config()) {
        warn!("navbar config was registered twice; keeping the first");
    }
    info!("starting agency web");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web layout around the shared header. The header only needs the current
/// path, so the `ui` crate never has to know this crate's `Route` enum.
#[component]
fn WebLayout() -> Element {
    let route = use_route::<Route>();

    rsx! {
        AgencyNavbar { current_path: route.to_string() }
        main { class: "site-main",
            Outlet::<Route> {}
        }
    }
}
