use dioxus::prelude::*;

#[component]
pub fn Chat() -> Element {
    rsx! {
        section { class: "page page-chat",
            h1 { "Chat" }
        }
    }
}
