//! Navigation entries shown in the top bar.
//!
//! The list is compiled in: two entries, always in the same order. Platform
//! crates map each `target` onto their own `Route` enum (see
//! `components::navigation_bar::register_nav`), so nothing in here knows about
//! the router.

use std::rc::Rc;

use dioxus::logger::tracing;

/// Class token carried by the `<nav>` container.
pub const NAVBAR_CLASS: &str = "navbar";

/// Element id of the `<nav>` container.
pub const NAVBAR_ID: &str = "navbar";

/// Class token carried by every link inside the bar.
pub const NAV_LINK_CLASS: &str = "navbar__link";

/// One clickable entry: a label and the path it navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

impl NavLink {
    pub const fn new(label: &'static str, target: &'static str) -> Self {
        Self { label, target }
    }

    /// Hand this link's target to the routing collaborator.
    pub fn activate(&self, navigator: &dyn Navigator) {
        tracing::debug!(label = self.label, path = self.target, "nav intent");
        navigator.navigate_to(self.target);
    }
}

pub const HOME: NavLink = NavLink::new("Home", "/");
pub const CHAT: NavLink = NavLink::new("Chat", "/chat");

/// Entries in render order.
pub const NAV_LINKS: [NavLink; 2] = [HOME, CHAT];

/// Receives navigation intents. The framework router fulfils this role on
/// real platforms; tests and the plain-anchor fallback go through the trait.
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

/// Context handle so a `Navigator` can be provided with `use_context_provider`.
#[derive(Clone)]
pub struct NavigatorHandle(pub Rc<dyn Navigator>);

impl NavigatorHandle {
    pub fn new<N: Navigator + 'static>(navigator: N) -> Self {
        Self(Rc::new(navigator))
    }
}
