//! Fallback for unknown routes.

use leptos::prelude::*;

use crate::util::route_labels::DASHBOARD_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <p class="not-found__code">"404"</p>
            <h1 class="not-found__title">"Page Not Found"</h1>
            <p class="not-found__text">"The page you are looking for does not exist or has been moved."</p>
            <a class="btn btn--primary" href=DASHBOARD_PATH>"Go to Dashboard"</a>
        </div>
    }
}
