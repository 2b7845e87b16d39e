use super::{ICON_STAR_FILL, Icon};
use crate::content::Rating;
use leptos::prelude::*;

/// Static row of filled stars followed by the rating label.
#[component]
pub fn StarRating(rating: Rating) -> impl IntoView {
    let stars = (0..rating.out_of)
        .map(|_| view! { <Icon path=ICON_STAR_FILL class="star-icon" /> })
        .collect::<Vec<_>>();

    view! {
        <div class="rating">
            {stars}
            <span class="rating-label">{rating.label()}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn one_star_per_point() {
        let rating = Rating {
            value: "3.9",
            out_of: 4,
        };
        let html = view! { <StarRating rating=rating /> }.to_html();
        assert_eq!(html.matches(r#"class="star-icon""#).count(), 4);
        assert!(html.contains("3.9 out of 4 stars"));
    }
}
