use crate::components::{Card, ICON_CHECK, Icon, Image};
use crate::content::{BenefitItem, ImageRef, SectionIntro};
use leptos::prelude::*;

/// Benefit list on one side, app image panel on the other.
#[component]
pub fn BenefitsSplit(
    intro: SectionIntro,
    benefits: [BenefitItem; 3],
    showcase: ImageRef,
) -> impl IntoView {
    view! {
        <section id=intro.id class="benefits">
            <div class="container benefits-grid">
                <div class="benefits-copy">
                    <h2 class="section-title">{intro.title}</h2>
                    <p class="section-description">{intro.lead}</p>
                    <ul class="benefit-list">
                        {benefits
                            .into_iter()
                            .map(|benefit| view! { <BenefitRow benefit=benefit /> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
                <div class="benefits-visual">
                    <Card class="showcase-card">
                        <div class="showcase-frame">
                            <Image image=showcase class="rounded" />
                        </div>
                    </Card>
                </div>
            </div>
        </section>
    }
}

#[component]
fn BenefitRow(benefit: BenefitItem) -> impl IntoView {
    view! {
        <li class="benefit">
            <Icon path=ICON_CHECK size="24" class="benefit-check" />
            <div>
                <div class="benefit-title">{benefit.title}</div>
                <div class="benefit-description">{benefit.description}</div>
            </div>
        </li>
    }
}
