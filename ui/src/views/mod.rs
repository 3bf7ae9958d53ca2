//! Pages mounted by the platform routers.

mod chat;
mod home;

pub use chat::Chat;
pub use home::Home;
