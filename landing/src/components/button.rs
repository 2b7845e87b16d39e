//! Button-styled links.
//!
//! The page never submits anything, so a "button" is always an anchor that
//! carries button styling.

use super::link_target;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Large,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Default => "btn-md",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Anchor rendered as a button.
#[component]
pub fn Button(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    /// Open in a new browsing context
    #[prop(default = false)]
    new_tab: bool,
    /// Extra classes appended after the variant classes
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let (target, rel) = link_target(new_tab);
    let class = ["btn", variant.class(), size.class(), class]
        .iter()
        .filter(|c| !c.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    view! {
        <a href=href class=class target=target rel=rel>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn outline_large_classes() {
        let html = view! {
            <Button href="#features" variant=ButtonVariant::Outline size=ButtonSize::Large>
                "Learn More"
            </Button>
        }
        .to_html();
        assert!(html.contains(r#"class="btn btn-outline btn-lg""#));
        assert!(html.contains(r##"href="#features""##));
        assert!(!html.contains("target="));
    }

    #[test]
    fn new_tab_button_sets_rel() {
        let html = view! {
            <Button href="https://example.com" new_tab=true class="nav-cta">
                "Go"
            </Button>
        }
        .to_html();
        assert!(html.contains(r#"class="btn btn-primary btn-md nav-cta""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }
}
