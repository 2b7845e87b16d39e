use crate::components::Image;
use crate::content::{BrandIdentity, FooterContent, FooterLinkGroup};
use leptos::prelude::*;

#[component]
pub fn Footer(brand: BrandIdentity, footer: FooterContent) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-brand-row">
                            <Image image={brand.logo(brand.name, 32)} class="rounded" />
                            <span class="footer-title">{brand.name}</span>
                        </div>
                        <p class="footer-blurb">{footer.blurb}</p>
                    </div>
                    {footer
                        .groups
                        .into_iter()
                        .map(|group| view! { <FooterColumn group=group /> })
                        .collect::<Vec<_>>()}
                </div>
                <p class="footer-copyright">{footer.copyright}</p>
            </div>
        </footer>
    }
}

#[component]
fn FooterColumn(group: FooterLinkGroup) -> impl IntoView {
    view! {
        <div class="footer-group">
            <h4 class="footer-group-title">{group.title}</h4>
            <ul class="footer-links">
                {group
                    .links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.href class="footer-link">{link.label}</a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CONTENT;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn three_groups_of_three_links() {
        let html = view! { <Footer brand=CONTENT.brand footer=CONTENT.footer /> }.to_html();
        assert_eq!(html.matches(r#"class="footer-group""#).count(), 3);
        assert_eq!(html.matches(r#"class="footer-link""#).count(), 9);
        assert!(html.contains("Building the future of mobile technology."));
    }
}
