use dioxus::logger::tracing;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::nav::{NavLink, NavigatorHandle, NAVBAR_CLASS, NAVBAR_ID, NAV_LINKS, NAV_LINK_CLASS};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Router-aware link construction, supplied by the platform crate.
///
/// `ui` does not know the platform's `Route` enum, so a platform registers a
/// builder that turns each [`NavLink`] into a fully wired `Link` element. The
/// returned element must carry [`NAV_LINK_CLASS`] and contain the label text.
///
/// ```ignore
/// use ui::components::navigation_bar::{register_nav, NavBuilder};
/// fn nav_link(link: &NavLink) -> Element {
///     rsx!(Link { class: NAV_LINK_CLASS, to: Route::Chat {}, "{link.label}" })
/// }
/// register_nav(NavBuilder { link: nav_link });
/// ```
///
/// Without a registered builder `NavigationBar` renders plain anchors.
pub struct NavBuilder {
    pub link: fn(&NavLink) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// Install the link builder. First registration wins; later calls are ignored.
pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::trace!("nav builder already registered");
    }
}

/// Top navigation bar: "Home" then "Chat", sticky above page content.
#[component]
pub fn NavigationBar() -> Element {
    tracing::trace!("NavigationBar render");

    let builder = NAV_BUILDER.get();
    let links = NAV_LINKS.into_iter().map(|link| {
        let target = link.target;
        match builder {
            Some(b) => {
                let routed = (b.link)(&link);
                rsx! { Fragment { key: "{target}", {routed} } }
            }
            None => rsx! { FallbackLink { key: "{target}", link } },
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav { id: NAVBAR_ID, class: NAVBAR_CLASS, {links} }
    }
}

/// Plain anchor used when no router-aware builder is registered. Clicks go to
/// the context `Navigator` when one exists, otherwise the browser follows `href`.
#[component]
fn FallbackLink(link: NavLink) -> Element {
    let navigator = try_use_context::<NavigatorHandle>();
    let label = link.label;

    rsx! {
        a {
            class: NAV_LINK_CLASS,
            href: link.target,
            onclick: move |evt: MouseEvent| {
                if let Some(handle) = navigator.as_ref() {
                    evt.prevent_default();
                    link.activate(handle.0.as_ref());
                }
            },
            "{label}"
        }
    }
}
