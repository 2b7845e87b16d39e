use crate::content::ImageRef;
use leptos::prelude::*;

/// `<img>` with intrinsic dimensions and alt text always set, so layout is
/// stable and a failed load degrades to readable text.
#[component]
pub fn Image(
    image: ImageRef,
    #[prop(default = "")] class: &'static str,
    /// Load immediately instead of lazily (above-the-fold images)
    #[prop(default = false)]
    eager: bool,
) -> impl IntoView {
    let loading = if eager { "eager" } else { "lazy" };
    view! {
        <img
            src=image.src
            alt=image.alt
            width=image.width.to_string()
            height=image.height.to_string()
            class=class
            loading=loading
            decoding="async"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_dimensions_and_alt() {
        let image = ImageRef {
            src: "/assets/logo.webp",
            alt: "Logo",
            width: 40,
            height: 40,
        };
        let html = view! { <Image image=image eager=true /> }.to_html();
        assert!(html.contains(r#"src="/assets/logo.webp""#));
        assert!(html.contains(r#"alt="Logo""#));
        assert!(html.contains(r#"width="40""#));
        assert!(html.contains(r#"height="40""#));
        assert!(html.contains(r#"loading="eager""#));
    }
}
