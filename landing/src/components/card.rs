use leptos::prelude::*;

/// Raised surface used by the feature cards, the benefits image panel and
/// the download CTA.
#[component]
pub fn Card(#[prop(default = "")] class: &'static str, children: Children) -> impl IntoView {
    let class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {class}")
    };
    view! { <div class=class>{children()}</div> }
}
