use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder, NavigationBar};
use ui::nav::{NavLink, NAV_LINK_CLASS};
use ui::views::{Chat, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/chat")]
    Chat {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Router-aware link for one nav entry. A target the router does not know
/// degrades to a plain anchor.
fn nav_link(link: &NavLink) -> Element {
    let label = link.label;
    match link.target.parse::<Route>() {
        Ok(route) => rsx!(Link {
            class: "{NAV_LINK_CLASS}",
            to: route,
            "{label}"
        }),
        Err(err) => {
            tracing::warn!(path = link.target, "unroutable nav target: {err}");
            rsx!(a {
                class: NAV_LINK_CLASS,
                href: link.target,
                "{label}"
            })
        }
    }
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger init failed: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder { link: nav_link });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Layout wrapping every route with the shared `NavigationBar`.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        NavigationBar {}
        Outlet::<Route> {}
    }
}
