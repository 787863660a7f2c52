use crate::layout::{self, LayoutParameters, ViewportClass};
use crate::navigation::{NavHandle, NavTarget};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::Lazy;

const HEADER_LOGO: Asset = asset!("/assets/header-logo.png");

static HEADER_CSS: Lazy<String> = Lazy::new(layout::stylesheet);

/// The author the avatar button points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorProfile {
    pub id: u32,
    /// Shown inside the avatar.
    pub initial: char,
}

impl Default for AuthorProfile {
    fn default() -> Self {
        Self {
            id: 5003,
            initial: 'S',
        }
    }
}

/// The two clickable elements of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLink {
    Logo,
    Avatar,
}

impl HeaderLink {
    pub fn target(self, profile: &AuthorProfile) -> NavTarget {
        match self {
            Self::Logo => NavTarget::home(),
            Self::Avatar => NavTarget::author(profile.id),
        }
    }

    /// Click action: exactly one navigation request per call.
    pub fn follow(self, profile: &AuthorProfile, navigator: &NavHandle) {
        navigator.go(&self.target(profile));
    }
}

/// Page header: brand logo on the left, author avatar on the right.
///
/// The stylesheet from [`layout::stylesheet`] picks the layout through a media
/// query. Passing `viewport` pins one class and writes its parameters inline,
/// which is what the mobile shell does.
#[component]
pub fn Header(
    navigator: NavHandle,
    #[props(default)] profile: AuthorProfile,
    viewport: Option<ViewportClass>,
) -> Element {
    let pinned: Option<LayoutParameters> = viewport.map(layout::layout_for);
    let container_style = pinned.map(|p| p.container_style());
    let logo_style = pinned.map(|p| p.logo_style());
    let avatar_style = pinned.map(|p| p.avatar_button_style());

    let initial = profile.initial;
    let on_logo = {
        let navigator = navigator.clone();
        let profile = profile.clone();
        move |_: MouseEvent| HeaderLink::Logo.follow(&profile, &navigator)
    };
    let on_avatar = move |_: MouseEvent| HeaderLink::Avatar.follow(&profile, &navigator);

    let css = HEADER_CSS.as_str();

    rsx! {
        document::Style { "{css}" }

        header { class: "masthead",
            div { class: "masthead__container", style: container_style,
                img {
                    class: "masthead__logo",
                    style: logo_style,
                    alt: t!("header-logo-alt"),
                    src: HEADER_LOGO,
                    onclick: on_logo,
                }
                button {
                    class: "masthead__avatar-button",
                    r#type: "button",
                    style: avatar_style,
                    aria_label: t!("header-profile-label"),
                    onclick: on_avatar,
                    span { class: "masthead__avatar", "{initial}" }
                }
            }
        }
    }
}
