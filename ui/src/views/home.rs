use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("page-home-title")} }
            p { {crate::t!("page-home-intro")} }
        }
    }
}
