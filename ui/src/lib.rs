//! Shared UI crate for Masthead. The header component and everything it needs
//! (layout policy, navigation capability, localization) live here; platform
//! crates only supply the router.

pub mod i18n;
pub mod layout;
pub mod navigation;
pub mod views;

pub mod components {
    // Page header (components/header.rs)
    pub mod header;
    pub use header::AuthorProfile;
    pub use header::Header;
    pub use header::HeaderLink;
}
