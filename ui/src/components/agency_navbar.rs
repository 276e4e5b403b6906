use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::icons::{ArrowRightIcon, ChevronDownIcon, CloseIcon, MenuIcon};
use super::scroll_watcher::use_scroll_watcher;
use crate::config::nav_config;
use crate::core::style::{desktop_link_class, mobile_link_class, HeaderStyle, ToggleGlyph};
use crate::core::{Destination, NavEvent, NavbarState, Transition};
use crate::i18n;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

const OVERLAY_ID: &str = "agency-nav-overlay";

/// Run `event` through the state machine and write the signal only when
/// something visible changed.
fn dispatch(mut nav: Signal<NavbarState>, event: NavEvent) -> Transition {
    let mut next = *nav.peek();
    let transition = next.handle(event);
    if transition.changed {
        nav.set(next);
    }
    transition
}

/// Fixed site header: brand, desktop menu with a Services dropdown, the
/// "Get Started" call to action and the mobile overlay menu.
///
/// `current_path` comes from the platform's router (the `ui` crate does not
/// know any `Route` enum); Home and Contact light up when it matches.
/// Navigation itself is left to the router's `Link` and to plain anchors.
#[component]
pub fn AgencyNavbar(current_path: String) -> Element {
    i18n::init();
    let config = nav_config();

    let nav = use_signal(|| NavbarState::new(config.compact_threshold));

    use_scroll_watcher(move |offset| {
        if dispatch(nav, NavEvent::Scrolled(offset)).changed {
            debug!(offset, "header compaction flipped");
        }
    });

    let activate = move |destination: Destination| {
        if let Some(target) = dispatch(nav, NavEvent::LinkActivated(destination)).navigate {
            debug!(href = target.href(), "overlay navigation requested");
        }
    };

    let state = nav();
    let style = HeaderStyle::compute(state.compacted(), state.menu_open());

    #[cfg(debug_assertions)]
    {
        debug!(
            path = %current_path,
            compacted = state.compacted(),
            menu_open = state.menu_open(),
            "AgencyNavbar render"
        );
    }

    let home_active = Destination::Home.is_active_at(&current_path);
    let contact_active = Destination::Contact.is_active_at(&current_path);

    let home = t!("nav-home");
    let services = t!("nav-services");
    let about = t!("nav-about");
    let contact = t!("nav-contact");
    let get_started = t!("nav-get-started");
    let toggle_label = t!("nav-toggle-menu");
    let primary_label = t!("nav-primary-label");
    let overlay_label = t!("nav-overlay-label");

    let brand = &config.brand;
    let brand_label = t!(
        "nav-brand-home",
        brand = format!("{}{}{}", brand.initial, brand.rest, brand.suffix)
    );

    let home_desktop = desktop_link_class(home_active);
    let contact_desktop = desktop_link_class(contact_active);
    let anchor_desktop = desktop_link_class(false);
    let home_mobile = mobile_link_class(home_active);
    let contact_mobile = mobile_link_class(contact_active);
    let anchor_mobile = mobile_link_class(false);
    let menu_open = state.menu_open();
    let overlay_hidden = !style.overlay_interactive;

    rsx! {
        // Include navbar stylesheet (and inline in release native)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "agency-nav", class: "{style.header}",
            div { class: "agency-nav__inner",
                Link { class: "agency-nav__brand", to: Destination::Home.href(),
                    span { class: "visually-hidden", "{brand_label}" }
                    span { "aria-hidden": "true",
                        span { class: "agency-nav__brand-accent agency-nav__brand-initial", "{brand.initial}" }
                        "{brand.rest}"
                        span { class: "agency-nav__brand-accent", "{brand.suffix}" }
                    }
                }

                // Desktop menu
                nav { class: "agency-nav__desktop", aria_label: "{primary_label}",
                    ul { class: "agency-nav__list",
                        li { class: "agency-nav__item",
                            Link { class: "{home_desktop}", to: Destination::Home.href(), "{home}" }
                        }
                        li { class: "agency-nav__item agency-nav__item--dropdown",
                            button {
                                r#type: "button",
                                class: "agency-nav__link agency-nav__trigger",
                                aria_haspopup: "true",
                                "{services}"
                                ChevronDownIcon {}
                            }
                            div { class: "agency-nav__dropdown",
                                div { class: "agency-nav__dropdown-grid",
                                    for card in config.services.iter() {
                                        a {
                                            key: "{card.name}",
                                            class: "agency-nav__card",
                                            href: Destination::Services.href(),
                                            h3 { class: "agency-nav__card-title", "{card.name}" }
                                            p { class: "agency-nav__card-text", "{card.description}" }
                                        }
                                    }
                                }
                            }
                        }
                        li { class: "agency-nav__item",
                            a { class: "{anchor_desktop}", href: Destination::About.href(), "{about}" }
                        }
                        li { class: "agency-nav__item",
                            Link { class: "{contact_desktop}", to: Destination::Contact.href(), "{contact}" }
                        }
                    }
                }

                Link { class: "agency-nav__cta", to: Destination::Contact.href(),
                    "{get_started}"
                    ArrowRightIcon {}
                }

                button {
                    r#type: "button",
                    class: "agency-nav__toggle",
                    aria_label: "{toggle_label}",
                    aria_expanded: "{menu_open}",
                    aria_controls: OVERLAY_ID,
                    onclick: move |_| {
                        dispatch(nav, NavEvent::TogglePressed);
                    },
                    {match style.toggle_glyph {
                        ToggleGlyph::Close => rsx! { CloseIcon {} },
                        ToggleGlyph::Menu => rsx! { MenuIcon {} },
                    }}
                }

                // Mobile overlay stays mounted so closing can fade out.
                div {
                    id: OVERLAY_ID,
                    class: "{style.overlay}",
                    aria_hidden: "{overlay_hidden}",
                    nav { class: "agency-nav__overlay-panel", aria_label: "{overlay_label}",
                        Link {
                            class: "{home_mobile}",
                            to: Destination::Home.href(),
                            onclick: move |_| activate(Destination::Home),
                            "{home}"
                        }
                        a {
                            class: "{anchor_mobile}",
                            href: Destination::Services.href(),
                            onclick: move |_| activate(Destination::Services),
                            "{services}"
                        }
                        a {
                            class: "{anchor_mobile}",
                            href: Destination::About.href(),
                            onclick: move |_| activate(Destination::About),
                            "{about}"
                        }
                        Link {
                            class: "{contact_mobile}",
                            to: Destination::Contact.href(),
                            onclick: move |_| activate(Destination::Contact),
                            "{contact}"
                        }
                        Link {
                            class: "agency-nav__overlay-cta",
                            to: Destination::Contact.href(),
                            onclick: move |_| activate(Destination::Contact),
                            "{get_started}"
                            ArrowRightIcon {}
                        }
                    }
                }
            }
        }
    }
}
