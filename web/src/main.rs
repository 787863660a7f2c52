use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::components::Header;
use ui::navigation::{NavHandle, RouterNavigator};
use ui::views::{Author, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/author/:id")]
    Author { id: u32 },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    info!("starting masthead web v{}", env!("CARGO_PKG_VERSION"));
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Load localization bundles once for the whole tree
    ui::i18n::init();

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Web layout: the shared `Header` wired to this crate's `Route` enum.
#[component]
fn WebShell() -> Element {
    let router = use_navigator();
    let navigator = use_hook(move || NavHandle::new(RouterNavigator::<Route>::new(router)));

    rsx! {
        Header { navigator: navigator }
        Outlet::<Route> {}
    }
}
