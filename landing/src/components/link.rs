//! Outbound links.

use crate::content::ExternalLink;
use leptos::prelude::*;

/// `target` for links that open a new browsing context.
pub const NEW_TAB_TARGET: &str = "_blank";

/// `rel` for links that open a new browsing context. The new page gets
/// neither `window.opener` nor a `Referer` header.
pub const NEW_TAB_REL: &str = "noopener noreferrer";

/// `target` and `rel` attribute values for a link; both are absent for
/// same-context links.
pub fn link_target(new_tab: bool) -> (Option<&'static str>, Option<&'static str>) {
    if new_tab {
        (Some(NEW_TAB_TARGET), Some(NEW_TAB_REL))
    } else {
        (None, None)
    }
}

/// Plain anchor around arbitrary children, following the new-tab policy of
/// the link.
#[component]
pub fn ExternalAnchor(
    link: ExternalLink,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let (target, rel) = link_target(link.new_tab);
    view! {
        <a href=link.url target=target rel=rel class=class>
            {children()}
        </a>
    }
}
