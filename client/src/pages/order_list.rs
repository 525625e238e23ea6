//! Order list route.

use leptos::prelude::*;

use crate::components::orders_table::OrdersTable;

#[component]
pub fn OrderListPage() -> impl IntoView {
    view! {
        <div class="order-list">
            <h1 class="page-title">"Order List"</h1>
            <OrdersTable />
        </div>
    }
}
