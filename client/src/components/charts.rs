//! Overview charts drawn as inline SVG.
//!
//! Geometry comes from `util::chart_geometry`; these components only lay
//! out axes, labels, and legends around it.

use leptos::prelude::*;

use crate::data::dashboard::{
    CURRENT_WEEK_REVENUE, PREVIOUS_WEEK_REVENUE, PROJECTIONS, PROJECTIONS_AXIS_MAX, REVENUE, REVENUE_AXIS_MAX,
    REVENUE_BY_LOCATION, TOP_PRODUCTS, TOTAL_SALES, format_currency,
};
use crate::state::ui::{Theme, UiState};
use crate::util::chart_geometry::{PlotBox, donut_segments, line_path, percent_of, stacked_bars, thousands_label, ticks};

const VIEW_WIDTH: f64 = 560.0;
const VIEW_HEIGHT: f64 = 220.0;
const PLOT: PlotBox = PlotBox { left: 40.0, top: 10.0, width: 510.0, height: 180.0 };
const TICK_COUNT: usize = 3;

fn view_box() -> String {
    format!("0 0 {VIEW_WIDTH:.0} {VIEW_HEIGHT:.0}")
}

/// Horizontal grid lines with their axis labels.
fn grid(max: f64, label: fn(f64) -> String) -> impl IntoView {
    ticks(max, TICK_COUNT)
        .into_iter()
        .map(|tick| {
            let y = PLOT.y_for(tick, max);
            view! {
                <line class="chart__grid" x1=PLOT.left y1=y x2={PLOT.left + PLOT.width} y2=y />
                <text class="chart__axis-label" x={PLOT.left - 8.0} y={y + 4.0} text-anchor="end">{label(tick)}</text>
            }
        })
        .collect_view()
}

fn month_labels(labels: Vec<&'static str>) -> impl IntoView {
    let count = labels.len();
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            view! {
                <text class="chart__axis-label" x={PLOT.slot_center(i, count)} y={PLOT.bottom() + 20.0} text-anchor="middle">
                    {label}
                </text>
            }
        })
        .collect_view()
}

#[component]
pub fn RevenueChart() -> impl IntoView {
    let current = REVENUE.iter().map(|p| p.current).collect::<Vec<_>>();
    let previous = REVENUE.iter().map(|p| p.previous).collect::<Vec<_>>();

    view! {
        <section class="chart-card chart-card--revenue">
            <header class="chart-card__header">
                <h3 class="chart-card__title">"Revenue"</h3>
                <ul class="chart-card__legend">
                    <li class="chart-card__legend-item chart-card__legend-item--current">
                        "Current Week " <strong>{CURRENT_WEEK_REVENUE}</strong>
                    </li>
                    <li class="chart-card__legend-item chart-card__legend-item--previous">
                        "Previous Week " <strong>{PREVIOUS_WEEK_REVENUE}</strong>
                    </li>
                </ul>
            </header>
            <svg class="chart" viewBox={view_box()} role="img" aria-label="Revenue by month">
                {grid(REVENUE_AXIS_MAX, thousands_label)}
                <path class="chart__line chart__line--previous" d={line_path(&PLOT, &previous, REVENUE_AXIS_MAX)} />
                <path class="chart__line chart__line--current" d={line_path(&PLOT, &current, REVENUE_AXIS_MAX)} />
                {month_labels(REVENUE.iter().map(|p| p.label).collect())}
            </svg>
        </section>
    }
}

#[component]
pub fn ProjectionsChart() -> impl IntoView {
    let pairs = PROJECTIONS.iter().map(|p| (p.actual, p.projection)).collect::<Vec<_>>();
    let bars = stacked_bars(&PLOT, &pairs, PROJECTIONS_AXIS_MAX, 24.0);

    view! {
        <section class="chart-card chart-card--projections">
            <h3 class="chart-card__title">"Projections vs Actuals"</h3>
            <svg class="chart" viewBox={view_box()} role="img" aria-label="Projections versus actuals by month">
                {grid(PROJECTIONS_AXIS_MAX, |tick| format!("{tick:.0}M"))}
                {bars
                    .into_iter()
                    .map(|bar| {
                        view! {
                            <rect
                                class="chart__bar chart__bar--projection"
                                x=bar.x
                                y=bar.projection_y
                                width=bar.width
                                height=bar.projection_height
                                rx="4"
                            />
                            <rect
                                class="chart__bar chart__bar--actual"
                                x=bar.x
                                y=bar.actual_y
                                width=bar.width
                                height=bar.actual_height
                            />
                        }
                    })
                    .collect_view()}
                {month_labels(PROJECTIONS.iter().map(|p| p.label).collect())}
            </svg>
        </section>
    }
}

#[component]
pub fn TotalSalesChart() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let radius = 60.0;
    let values = TOTAL_SALES.iter().map(|c| c.value).collect::<Vec<_>>();
    let total = values.iter().sum::<f64>();
    let segments = donut_segments(&values, radius, 4.0);
    let dark = move || ui.with(|u| u.theme == Theme::Dark);

    let rings = TOTAL_SALES
        .iter()
        .zip(segments)
        .map(|(channel, segment)| {
            let (light, dark_color) = (channel.color, channel.dark_color);
            let stroke = move || if dark() { dark_color } else { light };
            view! {
                <circle
                    class="donut__segment"
                    cx="80"
                    cy="80"
                    r=radius
                    fill="none"
                    stroke=stroke
                    stroke-width="20"
                    stroke-dasharray=segment.dash_array
                    stroke-dashoffset=segment.dash_offset
                    stroke-linecap="round"
                    transform="rotate(-90 80 80)"
                >
                    <title>{format!("{}: {:.1}%", channel.channel, segment.percent)}</title>
                </circle>
            }
        })
        .collect_view();

    view! {
        <section class="chart-card chart-card--sales">
            <h3 class="chart-card__title">"Total Sales"</h3>
            <svg class="donut" viewBox="0 0 160 160" role="img" aria-label="Total sales by channel">
                {rings}
            </svg>
            <ul class="chart-card__list">
                {TOTAL_SALES
                    .iter()
                    .map(|channel| {
                        let (light, dark_color) = (channel.color, channel.dark_color);
                        let swatch = move || format!("background: {};", if dark() { dark_color } else { light });
                        view! {
                            <li class="chart-card__list-item">
                                <span class="chart-card__swatch" style=swatch></span>
                                <span class="chart-card__list-label">{channel.channel}</span>
                                <span class="chart-card__list-value" title={format!("{:.1}%", percent_of(channel.value, total))}>
                                    {format_currency(channel.value)}
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
pub fn RevenueByLocation() -> impl IntoView {
    let max = REVENUE_BY_LOCATION.iter().map(|l| l.value).fold(0.0, f64::max);

    view! {
        <section class="chart-card chart-card--locations">
            <h3 class="chart-card__title">"Revenue by Location"</h3>
            <div class="world-map" aria-hidden="true"></div>
            <ul class="chart-card__list">
                {REVENUE_BY_LOCATION
                    .iter()
                    .map(|location| {
                        let fill = format!("width: {:.0}%;", percent_of(location.value, max));
                        view! {
                            <li class="chart-card__location">
                                <div class="chart-card__location-row">
                                    <span>{location.city}</span>
                                    <span>{location.label}</span>
                                </div>
                                <div class="chart-card__track">
                                    <div class="chart-card__fill" style=fill></div>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
pub fn TopProducts() -> impl IntoView {
    view! {
        <section class="chart-card chart-card--products">
            <h3 class="chart-card__title">"Top Selling Products"</h3>
            <table class="products-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Price"</th>
                        <th>"Quantity"</th>
                        <th>"Amount"</th>
                    </tr>
                </thead>
                <tbody>
                    {TOP_PRODUCTS
                        .iter()
                        .map(|product| {
                            view! {
                                <tr>
                                    <td>{product.name}</td>
                                    <td>{format_currency(product.price)}</td>
                                    <td>{product.quantity}</td>
                                    <td>{format_currency(product.amount)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}
