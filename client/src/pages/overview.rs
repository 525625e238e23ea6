//! Default dashboard: metric cards and the overview charts.

use leptos::prelude::*;

use crate::components::charts::{ProjectionsChart, RevenueByLocation, RevenueChart, TopProducts, TotalSalesChart};
use crate::components::metric_card::MetricCard;
use crate::data::dashboard::METRICS;

#[component]
pub fn OverviewPage() -> impl IntoView {
    view! {
        <div class="overview">
            <h1 class="page-title">"eCommerce"</h1>
            <div class="overview__top">
                <div class="overview__metrics">
                    {METRICS.into_iter().map(|metric| view! { <MetricCard metric=metric /> }).collect_view()}
                </div>
                <ProjectionsChart />
            </div>
            <div class="overview__middle">
                <RevenueChart />
                <RevenueByLocation />
            </div>
            <div class="overview__bottom">
                <TopProducts />
                <TotalSalesChart />
            </div>
        </div>
    }
}
