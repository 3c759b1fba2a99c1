//! Dashboard page with summary counts and the most recent alerts.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::stat_card::StatCard;
use crate::net::resources::{load_alerts, load_events};
use crate::net::types::Alert;

/// Dashboard page. Protected; redirects to `/login` without a session.
#[component]
pub fn DashboardPage() -> impl IntoView {
    crate::guard::use_session_guard();

    let events = LocalResource::new(|| load_events());
    let alerts = LocalResource::new(|| load_alerts());

    let open_alerts = |list: &[Alert]| list.iter().filter(|a| a.status != "acknowledged").count();

    view! {
        <div class="page">
            <NavBar/>
            <main class="page__body">
                <h1>"Dashboard"</h1>

                <Suspense fallback=move || view! { <p>"Loading summary..."</p> }>
                    <div class="stat-grid">
                        {move || {
                            events.get().map(|res| match res {
                                Ok(list) => {
                                    view! { <StatCard label="Events" value=list.len()/> }.into_any()
                                }
                                Err(e) => view! { <div class="alert alert--error">{e}</div> }.into_any(),
                            })
                        }}
                        {move || {
                            alerts.get().map(|res| match res {
                                Ok(list) => {
                                    view! {
                                        <div class="stat-grid__pair">
                                            <StatCard label="Alerts" value=list.len()/>
                                            <StatCard label="Open alerts" value=open_alerts(&list)/>
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(e) => view! { <div class="alert alert--error">{e}</div> }.into_any(),
                            })
                        }}
                    </div>
                </Suspense>

                <h2>"Recent alerts"</h2>
                <Suspense fallback=move || view! { <p>"Loading alerts..."</p> }>
                    {move || {
                        alerts.get().map(|res| match res {
                            Ok(list) => {
                                view! {
                                    <ul class="alert-list">
                                        {list
                                            .into_iter()
                                            .take(5)
                                            .map(|a| {
                                                view! {
                                                    <li class="alert-list__item">
                                                        <span class="badge">{a.severity}</span>
                                                        <span>{a.message}</span>
                                                        <span class="alert-list__ts">{a.created_at}</span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
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
