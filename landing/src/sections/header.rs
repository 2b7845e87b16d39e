use crate::components::{Button, ButtonVariant, Image};
use crate::content::{BrandIdentity, HeaderContent};
use leptos::prelude::*;

#[component]
pub fn Header(brand: BrandIdentity, header: HeaderContent) -> impl IntoView {
    let nav_links = header
        .nav
        .iter()
        .map(|anchor| {
            view! { <a href=anchor.href() class="nav-link">{anchor.label}</a> }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="site-header">
            <div class="container nav-inner">
                <div class="nav-brand">
                    <Image image={brand.logo(brand.name, 40)} class="rounded" eager=true />
                    <span class="nav-title">{brand.name}</span>
                </div>
                <nav class="nav-links">{nav_links}</nav>
                <Button
                    href=header.cta.url
                    variant=ButtonVariant::Outline
                    new_tab=header.cta.new_tab
                    class="nav-cta"
                >
                    {header.cta_label}
                </Button>
            </div>
        </header>
    }
}
