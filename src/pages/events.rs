//! Events page listing ingested monitoring events.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::resources::load_events;

/// Events page. Protected; redirects to `/login` without a session.
#[component]
pub fn EventsPage() -> impl IntoView {
    crate::guard::use_session_guard();

    let events = LocalResource::new(|| load_events());

    view! {
        <div class="page">
            <NavBar/>
            <main class="page__body">
                <h1>"Events"</h1>

                <Suspense fallback=move || view! { <p>"Loading events..."</p> }>
                    {move || {
                        events.get().map(|res| match res {
                            Ok(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Type"</th>
                                                <th>"Source"</th>
                                                <th>"Severity"</th>
                                                <th>"Received"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|event| {
                                                    view! {
                                                        <tr>
                                                            <td>{event.event_type}</td>
                                                            <td>{event.source}</td>
                                                            <td>{event.severity}</td>
                                                            <td>{event.created_at}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <div class="alert alert--error">{e}</div> }.into_any(),
                        })
                    }}
                </Suspense>
            </main>
        </div>
    }
}
