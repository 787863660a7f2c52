use dioxus::prelude::*;

/// Target of the header's avatar button.
#[component]
pub fn Author(id: u32) -> Element {
    rsx! {
        section { class: "page page-author",
            h1 { {crate::t!("page-author-title", id = id)} }
            p { {crate::t!("page-author-intro")} }
        }
    }
}
