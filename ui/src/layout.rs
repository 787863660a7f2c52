//! Breakpoint-driven layout for the header.
//!
//! The header has two size classes. [`layout_for`] maps a class to the concrete
//! flex/margin parameters, and [`stylesheet`] turns both classes into one CSS
//! block (compact rules as the base, regular rules behind a `min-width` media
//! query). Nothing in here touches Dioxus, so the breakpoint policy can be
//! exercised without a renderer.

use std::fmt;

/// Viewport width (px) at which the header switches to the regular layout.
pub const BREAKPOINT_PX: u32 = 600;

/// Size class of the viewport the header is laid out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    /// Below [`BREAKPOINT_PX`].
    Compact,
    /// At or above [`BREAKPOINT_PX`].
    Regular,
}

impl ViewportClass {
    pub fn from_width(width_px: u32) -> Self {
        if width_px < BREAKPOINT_PX {
            Self::Compact
        } else {
            Self::Regular
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    Column,
}

impl fmt::Display for FlexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Row => "row",
            Self::Column => "column",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JustifyContent {
    Center,
    SpaceBetween,
}

impl fmt::Display for JustifyContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Center => "center",
            Self::SpaceBetween => "space-between",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignItems {
    Center,
}

impl fmt::Display for AlignItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Center => "center",
        })
    }
}

/// A CSS length. `Zero` renders unitless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Zero,
    Px(u32),
    Rem(f32),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => f.write_str("0"),
            Self::Px(px) => write!(f, "{px}px"),
            Self::Rem(rem) => write!(f, "{rem}rem"),
        }
    }
}

/// Everything about the header that varies with the viewport class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParameters {
    pub direction: FlexDirection,
    pub justify: JustifyContent,
    pub align: AlignItems,
    pub logo_margin_left: Length,
    pub avatar_margin_right: Length,
    /// Horizontal padding of the inner container.
    pub gutter: Length,
}

impl LayoutParameters {
    pub fn container_style(&self) -> String {
        format!(
            "display: flex; flex-direction: {}; align-items: {}; justify-content: {}; padding-left: {gutter}; padding-right: {gutter};",
            self.direction,
            self.align,
            self.justify,
            gutter = self.gutter,
        )
    }

    pub fn logo_style(&self) -> String {
        format!("margin-left: {};", self.logo_margin_left)
    }

    pub fn avatar_button_style(&self) -> String {
        format!("margin-right: {};", self.avatar_margin_right)
    }
}

pub fn layout_for(class: ViewportClass) -> LayoutParameters {
    match class {
        ViewportClass::Compact => LayoutParameters {
            direction: FlexDirection::Column,
            justify: JustifyContent::Center,
            align: AlignItems::Center,
            logo_margin_left: Length::Zero,
            avatar_margin_right: Length::Zero,
            gutter: Length::Px(16),
        },
        ViewportClass::Regular => LayoutParameters {
            direction: FlexDirection::Row,
            justify: JustifyContent::SpaceBetween,
            align: AlignItems::Center,
            logo_margin_left: Length::Rem(4.0),
            avatar_margin_right: Length::Rem(4.0),
            gutter: Length::Px(24),
        },
    }
}

// Size-class independent rules.
const BASE_RULES: &str = "\
.masthead { border-bottom: 1px solid var(--primary-color); padding: 1rem 0; }
.masthead__container { width: 100%; max-width: 1200px; margin-left: auto; margin-right: auto; box-sizing: border-box; }
.masthead__logo { object-fit: cover; width: 8rem; }
.masthead__logo:hover { cursor: pointer; }
.masthead__avatar-button { display: inline-flex; align-items: center; justify-content: center; padding: 8px; border: none; border-radius: 50%; background: transparent; color: var(--primary-color); cursor: pointer; }
.masthead__avatar-button:hover { background: rgba(0, 0, 0, 0.04); }
.masthead__avatar { display: flex; align-items: center; justify-content: center; width: 40px; height: 40px; border-radius: 50%; background: var(--secondary-color); color: #fff; font-size: 1.25rem; line-height: 1; user-select: none; }
";

fn class_rules(params: &LayoutParameters) -> String {
    format!(
        ".masthead__container {{ {} }}\n.masthead__logo {{ {} }}\n.masthead__avatar-button {{ {} }}\n",
        params.container_style(),
        params.logo_style(),
        params.avatar_button_style(),
    )
}

/// Full header stylesheet covering both viewport classes.
pub fn stylesheet() -> String {
    let compact = class_rules(&layout_for(ViewportClass::Compact));
    let regular = class_rules(&layout_for(ViewportClass::Regular));
    format!("{BASE_RULES}{compact}@media (min-width: {BREAKPOINT_PX}px) {{\n{regular}}}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_below_breakpoint_is_compact() {
        assert_eq!(ViewportClass::from_width(0), ViewportClass::Compact);
        assert_eq!(ViewportClass::from_width(599), ViewportClass::Compact);
    }

    #[test]
    fn width_at_breakpoint_is_regular() {
        assert_eq!(ViewportClass::from_width(600), ViewportClass::Regular);
        assert_eq!(ViewportClass::from_width(1920), ViewportClass::Regular);
    }

    #[test]
    fn compact_layout_stacks_and_centers() {
        let params = layout_for(ViewportClass::Compact);
        assert_eq!(params.direction, FlexDirection::Column);
        assert_eq!(params.justify, JustifyContent::Center);
        assert_eq!(params.logo_margin_left, Length::Zero);
        assert_eq!(params.avatar_margin_right, Length::Zero);
    }

    #[test]
    fn regular_layout_is_a_spaced_row() {
        let params = layout_for(ViewportClass::Regular);
        assert_eq!(params.direction, FlexDirection::Row);
        assert_eq!(params.justify, JustifyContent::SpaceBetween);
        assert_eq!(params.logo_style(), "margin-left: 4rem;");
        assert_eq!(params.avatar_button_style(), "margin-right: 4rem;");
    }

    #[test]
    fn container_style_renders_flex_declarations() {
        let style = layout_for(ViewportClass::Compact).container_style();
        assert!(style.contains("flex-direction: column;"));
        assert!(style.contains("justify-content: center;"));
        assert!(style.contains("align-items: center;"));
        assert!(style.contains("padding-left: 16px;"));
    }

    #[test]
    fn stylesheet_puts_regular_rules_behind_media_query() {
        let css = stylesheet();
        let (base, media) = css
            .split_once("@media (min-width: 600px)")
            .expect("media query present");
        assert!(base.contains("flex-direction: column;"));
        assert!(!base.contains("flex-direction: row;"));
        assert!(media.contains("flex-direction: row;"));
        assert!(media.contains("justify-content: space-between;"));
        assert!(css.contains("border-bottom: 1px solid var(--primary-color)"));
    }
}
