//! Projects route. There is no project store yet, so this is the empty state.

use leptos::prelude::*;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <div class="projects">
            <h1 class="page-title">"Projects"</h1>
            <div class="empty-state">
                <span class="empty-state__icon icon icon--folder" aria-hidden="true"></span>
                <h2 class="empty-state__title">"No Projects Yet"</h2>
                <p class="empty-state__text">"Get started by creating your first project."</p>
                <button class="btn btn--primary" type="button">"Create New Project"</button>
            </div>
        </div>
    }
}
