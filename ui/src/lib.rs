//! Shared UI crate for ragchat: the navigation model, the top bar and the
//! routed pages. Platform crates own the `Route` enum.

pub mod nav;
pub mod views;

pub mod components {
    pub mod navigation_bar;
    pub use navigation_bar::register_nav;
    pub use navigation_bar::NavBuilder;
    pub use navigation_bar::NavigationBar;
}
