//! Root document component - the complete HTML page.

use crate::content::LandingContent;
use crate::sections::{
    BenefitsSplit, DownloadCta, FeaturesGrid, Footer, Header, Hero, StatsStrip,
};
use crate::styles::{CSP, LANDING_CSS};
use leptos::prelude::*;

/// The complete HTML document for the landing page.
///
/// Sections render in a fixed order: header, hero, stats, features,
/// benefits, download, footer.
#[component]
pub fn LandingDocument(content: LandingContent) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=content.hero.subheadline />
                <title>{content.brand.name}</title>
                <link rel="icon" href=content.brand.logo_src />
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <div class="page">
                    <Header brand=content.brand header=content.header />
                    <main>
                        <Hero hero=content.hero store_badge=content.store_badge />
                        <StatsStrip stats=content.stats />
                        <FeaturesGrid intro=content.features_intro features=content.features />
                        <BenefitsSplit
                            intro=content.benefits_intro
                            benefits=content.benefits
                            showcase=content.showcase
                        />
                        <DownloadCta
                            intro=content.download_intro
                            store=content.store
                            store_badge=content.store_badge
                            rating=content.rating
                        />
                    </main>
                    <Footer brand=content.brand footer=content.footer />
                </div>
            </body>
        </html>
    }
}
