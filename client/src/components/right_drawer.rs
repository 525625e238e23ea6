//! Right drawer feed: notifications, recent activity, and contacts.

use leptos::prelude::*;

use crate::data::feed::{ACTIVITIES, CONTACTS, NOTIFICATIONS, initials};
use crate::state::highlight::ShellCues;

#[component]
pub fn RightDrawerContent() -> impl IntoView {
    let cues = expect_context::<RwSignal<ShellCues>>();
    let highlighted = move || cues.with(|c| c.notifications.is_lit());

    view! {
        <div class="feed">
            <section class="feed__section" class:feed__section--highlight=highlighted aria-live="polite">
                <h3 class="feed__title">"Notifications"</h3>
                <ul class="feed__list">
                    {NOTIFICATIONS
                        .iter()
                        .map(|n| {
                            view! {
                                <li class="feed__item" data-id=n.id>
                                    <span class="feed__badge feed__badge--icon" aria-hidden="true">{n.kind.icon()}</span>
                                    <div class="feed__body">
                                        <p class="feed__text">{n.title}</p>
                                        <p class="feed__time">{n.timestamp}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>

            <section class="feed__section">
                <h3 class="feed__title">"Activities"</h3>
                <ul class="feed__list feed__list--timeline">
                    {ACTIVITIES
                        .iter()
                        .map(|a| {
                            view! {
                                <li class="feed__item" data-id=a.id>
                                    <span class="feed__badge feed__badge--avatar" title=a.user>{initials(a.user)}</span>
                                    <div class="feed__body">
                                        <p class="feed__text">{a.action}</p>
                                        <p class="feed__time">{a.timestamp}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>

            <section class="feed__section">
                <h3 class="feed__title">"Contacts"</h3>
                <ul class="feed__list">
                    {CONTACTS
                        .iter()
                        .map(|c| {
                            view! {
                                <li class="feed__item feed__item--contact" data-id=c.id>
                                    <span class="feed__badge feed__badge--avatar">
                                        {initials(c.name)}
                                        <span
                                            class=format!("feed__presence feed__presence--{}", c.presence.as_str())
                                            aria-label=c.presence.as_str()
                                        ></span>
                                    </span>
                                    <p class="feed__text">{c.name}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
