//! Headline figure with its period-over-period change.

use leptos::prelude::*;

use crate::data::dashboard::{Metric, Trend};

#[component]
pub fn MetricCard(metric: Metric) -> impl IntoView {
    let trend_class = match metric.trend {
        Trend::Up => "metric-card__change metric-card__change--up",
        Trend::Down => "metric-card__change metric-card__change--down",
    };
    let arrow = match metric.trend {
        Trend::Up => "↗",
        Trend::Down => "↘",
    };
    let change = format!("{:+.2}%", metric.change);
    let body = view! {
        <p class="metric-card__label">{metric.label}</p>
        <div class="metric-card__row">
            <span class="metric-card__value">{metric.value}</span>
            <span class=trend_class>
                {change}
                <span aria-hidden="true">{arrow}</span>
            </span>
        </div>
    };

    match metric.link {
        Some(href) => view! {
            <a class="metric-card metric-card--link" href=href style=format!("background: {};", metric.background)>
                {body}
            </a>
        }
        .into_any(),
        None => view! {
            <div class="metric-card" style=format!("background: {};", metric.background)>
                {body}
            </div>
        }
        .into_any(),
    }
}
