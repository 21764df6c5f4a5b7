//! Home View
//!
//! Greeting for the configured client and an overview chart.

use leptos::*;

use crate::charts::{BarChart, BarDatum};
use crate::models::{demo_orders, demo_profiles, demo_projects};
use crate::state::RuntimeStore;

#[component]
pub fn HomeView() -> impl IntoView {
    let store = expect_context::<RuntimeStore>();

    let greeting = move || {
        let name = store
            .config_options
            .with(|c| c.client_name().map(str::to_string))
            .unwrap_or_else(|| store.client_name.get());
        if name.is_empty() {
            "Welcome".to_string()
        } else {
            format!("Welcome, {}", name)
        }
    };

    let totals = [
        ("Projects", demo_projects().len()),
        ("Orders", demo_orders().len()),
        ("Profiles", demo_profiles().len()),
    ];
    let data = Signal::derive(move || {
        totals
            .iter()
            .map(|(label, count)| BarDatum::new(*label, *count as f64))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold font-display">{greeting}</h1>
                <p class="text-gray-400 mt-1">"Here is where things stand today."</p>
            </div>

            <div class="grid grid-cols-3 gap-4">
                {totals
                    .iter()
                    .map(|(label, count)| view! {
                        <div class="bg-primary-100 rounded-xl p-4">
                            <div class="text-sm text-gray-500">{*label}</div>
                            <div class="text-2xl font-bold">{*count}</div>
                        </div>
                    })
                    .collect_view()}
            </div>

            <section class="rounded-xl p-6 bg-secondary-400">
                <BarChart data=data />
            </section>
        </div>
    }
}
