use crate::shared::icons::icon;
use contracts::shared::indicators::{StatSummary, Trend};
use leptos::prelude::*;

fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Increase => "stat-card__change stat-card__change--up",
        Trend::Decrease => "stat-card__change stat-card__change--down",
        Trend::Neutral => "stat-card__change",
    }
}

#[component]
pub fn StatCard(summary: StatSummary) -> impl IntoView {
    let arrow = match summary.trend {
        Trend::Increase => Some(icon("trending-up")),
        Trend::Decrease => Some(icon("trending-down")),
        Trend::Neutral => None,
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__content">
                <div class="stat-card__label">{summary.title}</div>
                <div class="stat-card__value">{summary.value}</div>
                <div class=trend_class(summary.trend)>
                    {arrow}
                    <span>{summary.change}</span>
                </div>
            </div>
            <div class=format!("stat-card__icon stat-card__icon--{}", summary.accent.css_modifier())>
                {icon(&summary.icon)}
            </div>
        </div>
    }
}

/// Responsive row of stat cards.
#[component]
pub fn StatGrid(stats: Vec<StatSummary>) -> impl IntoView {
    view! {
        <div class="stat-grid">
            {stats.into_iter().map(|summary| view! { <StatCard summary=summary /> }).collect_view()}
        </div>
    }
}
