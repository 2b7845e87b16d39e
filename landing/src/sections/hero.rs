use crate::components::{
    Button, ButtonSize, ButtonVariant, ExternalAnchor, ICON_ARROW_RIGHT, Icon, Image,
};
use crate::content::{HeroContent, ImageRef};
use leptos::prelude::*;

#[component]
pub fn Hero(hero: HeroContent, store_badge: ImageRef) -> impl IntoView {
    let secondary = hero.secondary_cta;

    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-logo">
                        <Image image=hero.logo class="rounded-xl" eager=true />
                    </div>
                    <div class="hero-badge">{hero.eyebrow}</div>
                    <h1 class="hero-title">{hero.headline}</h1>
                    <p class="hero-description">{hero.subheadline}</p>
                    <div class="hero-actions">
                        <ExternalAnchor link=hero.primary_cta class="store-badge">
                            <Image image=store_badge eager=true />
                        </ExternalAnchor>
                        <Button
                            href=secondary.href()
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Large
                        >
                            <span>{secondary.label}</span>
                            <Icon path=ICON_ARROW_RIGHT class="btn-icon" />
                        </Button>
                    </div>
                    <p class="hero-fine-print">{hero.fine_print}</p>
                </div>
            </div>
        </section>
    }
}
