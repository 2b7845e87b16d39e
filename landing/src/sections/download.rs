use crate::components::{Card, ExternalAnchor, Image, StarRating};
use crate::content::{ExternalLink, ImageRef, Rating, SectionIntro};
use leptos::prelude::*;

/// Closing call-to-action: store badge plus the static rating.
#[component]
pub fn DownloadCta(
    intro: SectionIntro,
    store: ExternalLink,
    store_badge: ImageRef,
    rating: Rating,
) -> impl IntoView {
    view! {
        <section id=intro.id class="download">
            <div class="container">
                <Card class="download-card">
                    <h2 class="section-title">{intro.title}</h2>
                    <p class="section-description">{intro.lead}</p>
                    <div class="download-actions">
                        <ExternalAnchor link=store class="store-badge">
                            <Image image=store_badge />
                        </ExternalAnchor>
                    </div>
                    <StarRating rating=rating />
                </Card>
            </div>
        </section>
    }
}
