use crate::content::StatItem;
use leptos::prelude::*;

#[component]
pub fn StatsStrip(stats: [StatItem; 4]) -> impl IntoView {
    view! {
        <section class="stats">
            <div class="container stats-grid">
                {stats
                    .into_iter()
                    .map(|stat| view! { <StatCard stat=stat /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn StatCard(stat: StatItem) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-value">{stat.value}</div>
            <div class="stat-label">{stat.description}</div>
        </div>
    }
}
