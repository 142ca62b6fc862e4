use contracts::dashboards::d400_overview::{customer_activity, revenue_series, RevenueRange};
use contracts::enums::ClosedSet;
use leptos::prelude::*;

use crate::dashboards::d400_overview::chart::{
    area_points, bar_layout, grid_lines, line_vertices, polyline_points, Viewport,
};
use crate::shared::number_format::format_thousands;

const CHART_VIEW: Viewport = Viewport::new(480.0, 280.0);

#[component]
pub fn RevenueChart() -> impl IntoView {
    let range = RwSignal::new(RevenueRange::Last7Days);
    let series = Memo::new(move |_| revenue_series(range.get()));

    let on_range = move |ev: leptos::ev::Event| {
        if let Some(next) = RevenueRange::from_code(&event_target_value(&ev)) {
            log::debug!("revenue range: {}", next);
            range.set(next);
        }
    };

    view! {
        <div class="chart-card">
            <div class="chart-card__header">
                <h3 class="chart-card__title">"Weekly Revenue"</h3>
                <select class="filter-select" on:change=on_range prop:value=move || range.get().code()>
                    {RevenueRange::all()
                        .into_iter()
                        .map(|option| view! { <option value=option.code()>{option.display_name()}</option> })
                        .collect_view()}
                </select>
            </div>
            <svg class="chart-card__svg" viewBox=CHART_VIEW.view_box() preserveAspectRatio="none">
                <defs>
                    <linearGradient id="revenue-bar" x1="0" y1="0" x2="0" y2="1">
                        <stop offset="0%" stop-color="#3b82f6" />
                        <stop offset="100%" stop-color="#8b5cf6" />
                    </linearGradient>
                </defs>
                {move || series.with(|points| {
                    let grid = grid_lines(points, &CHART_VIEW)
                        .into_iter()
                        .map(|line| view! {
                            <line class="chart-grid" x1=CHART_VIEW.pad_left x2=CHART_VIEW.width y1=line.y y2=line.y />
                            <text class="chart-axis" x={CHART_VIEW.pad_left - 6.0} y={line.y + 4.0} text-anchor="end">
                                {line.label}
                            </text>
                        })
                        .collect_view();
                    let bars = bar_layout(points, &CHART_VIEW)
                        .into_iter()
                        .map(|bar| view! {
                            <rect x=bar.x y=bar.y width=bar.width height=bar.height rx="6" fill="url(#revenue-bar)">
                                <title>{format!("{}: ${}", bar.label, format_thousands(bar.value as u64))}</title>
                            </rect>
                            <text class="chart-axis" x=bar.label_x y={CHART_VIEW.height - 6.0} text-anchor="middle">
                                {bar.label}
                            </text>
                        })
                        .collect_view();
                    view! { <g>{grid}</g> <g>{bars}</g> }
                })}
            </svg>
        </div>
    }
}

#[component]
pub fn ActivityChart() -> impl IntoView {
    let points = customer_activity();
    let vertices = line_vertices(&points, &CHART_VIEW);

    let grid = grid_lines(&points, &CHART_VIEW)
        .into_iter()
        .map(|line| view! {
            <line class="chart-grid" x1=CHART_VIEW.pad_left x2=CHART_VIEW.width y1=line.y y2=line.y />
            <text class="chart-axis" x={CHART_VIEW.pad_left - 6.0} y={line.y + 4.0} text-anchor="end">
                {line.label}
            </text>
        })
        .collect_view();

    let markers = points
        .iter()
        .zip(vertices.iter())
        .map(|(point, &(x, y))| view! {
            <circle class="chart-marker" cx=x cy=y r="4">
                <title>{format!("{}: {} orders", point.label, point.value)}</title>
            </circle>
            <text class="chart-axis" x=x y={CHART_VIEW.height - 6.0} text-anchor="middle">
                {point.label.clone()}
            </text>
        })
        .collect_view();

    view! {
        <div class="chart-card">
            <div class="chart-card__header">
                <h3 class="chart-card__title">"Total Orders by Customers"</h3>
                <div class="chart-card__legend">
                    <span class="chart-card__legend-dot"></span>
                    <span>"Daily Activity"</span>
                </div>
            </div>
            <svg class="chart-card__svg" viewBox=CHART_VIEW.view_box() preserveAspectRatio="none">
                <defs>
                    <linearGradient id="activity-area" x1="0" y1="0" x2="0" y2="1">
                        <stop offset="0%" stop-color="#ec4899" stop-opacity="0.35" />
                        <stop offset="100%" stop-color="#8b5cf6" stop-opacity="0" />
                    </linearGradient>
                </defs>
                <g>{grid}</g>
                <polygon points=area_points(&vertices, &CHART_VIEW) fill="url(#activity-area)" />
                <polyline class="chart-line" points=polyline_points(&vertices) fill="none" />
                <g>{markers}</g>
            </svg>
        </div>
    }
}
