//! Small labeled stat used on the dashboard.

use leptos::prelude::*;

/// A labeled numeric stat.
#[component]
pub fn StatCard(label: &'static str, value: usize) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
