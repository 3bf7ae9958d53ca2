use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Document chat" }
            p { "Open the Chat page to start a conversation." }
        }
    }
}
