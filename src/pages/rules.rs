//! Rules page with enable/disable toggles and delete actions.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::resources::load_rules;

/// Rules page. Protected; redirects to `/login` without a session.
#[component]
pub fn RulesPage() -> impl IntoView {
    crate::guard::use_session_guard();

    let rules = LocalResource::new(|| load_rules());

    view! {
        <div class="page">
            <NavBar/>
            <main class="page__body">
                <h1>"Rules"</h1>

                <Suspense fallback=move || view! { <p>"Loading rules..."</p> }>
                    {move || {
                        rules.get().map(|res| match res {
                            Ok(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Event type"</th>
                                                <th>"Severity"</th>
                                                <th>"Enabled"</th>
                                                <th>"Actions"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|rule| {
                                                    let toggle_label =
                                                        if rule.enabled { "Disable" } else { "Enable" };
                                                    let toggle_rule = rule.clone();
                                                    let delete_id = rule.id.clone();
                                                    view! {
                                                        <tr>
                                                            <td>{rule.name}</td>
                                                            <td>{rule.event_type}</td>
                                                            <td>{rule.severity}</td>
                                                            <td>{if rule.enabled { "yes" } else { "no" }}</td>
                                                            <td>
                                                                <button
                                                                    class="btn"
                                                                    on:click=move |_| {
                                                                        #[cfg(feature = "hydrate")]
                                                                        {
                                                                            let rule = toggle_rule.clone();
                                                                            leptos::task::spawn_local(async move {
                                                                                if crate::net::resources::toggle_rule(rule).await.is_ok() {
                                                                                    rules.refetch();
                                                                                }
                                                                            });
                                                                        }
                                                                        #[cfg(not(feature = "hydrate"))]
                                                                        {
                                                                            let _ = &toggle_rule;
                                                                        }
                                                                    }
                                                                >
                                                                    {toggle_label}
                                                                </button>
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| {
                                                                        #[cfg(feature = "hydrate")]
                                                                        {
                                                                            let id = delete_id.clone();
                                                                            leptos::task::spawn_local(async move {
                                                                                if crate::net::resources::remove_rule(id).await.is_ok() {
                                                                                    rules.refetch();
                                                                                }
                                                                            });
                                                                        }
                                                                        #[cfg(not(feature = "hydrate"))]
                                                                        {
                                                                            let _ = &delete_id;
                                                                        }
                                                                    }
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            </td>
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
