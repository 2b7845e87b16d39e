use crate::components::{Card, Icon, feature_icon_path};
use crate::content::{FeatureItem, SectionIntro};
use leptos::prelude::*;

#[component]
pub fn FeaturesGrid(intro: SectionIntro, features: [FeatureItem; 3]) -> impl IntoView {
    view! {
        <section id=intro.id class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{intro.title}</h2>
                    <p class="section-description">{intro.lead}</p>
                </div>
                <div class="features-grid">
                    {features
                        .into_iter()
                        .map(|feature| view! { <FeatureCard feature=feature /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: FeatureItem) -> impl IntoView {
    view! {
        <Card class="feature-card">
            <div class="feature-icon">
                <Icon path={feature_icon_path(feature.icon)} size="24" />
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CONTENT;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_three_cards_in_source_order() {
        let html = view! {
            <FeaturesGrid intro=CONTENT.features_intro features=CONTENT.features />
        }
        .to_html();

        assert!(html.contains(r#"id="features""#));
        assert_eq!(html.matches(r#"class="card feature-card""#).count(), 3);

        let positions: Vec<usize> = CONTENT
            .features
            .iter()
            .map(|f| html.find(f.title).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
