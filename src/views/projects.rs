//! Projects View

use leptos::*;

use crate::charts::{BarChart, BarDatum};
use crate::models::{demo_projects, Project};

#[component]
pub fn ProjectsView() -> impl IntoView {
    let projects = store_value(demo_projects());

    let data = Signal::derive(move || {
        projects.with_value(|list| {
            list.iter()
                .map(|p| BarDatum::new(p.name.clone(), p.progress as f64))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="space-y-8">
            <h1 class="text-3xl font-bold">"Projects"</h1>

            <section class="rounded-xl p-6 bg-secondary-400">
                <BarChart data=data height=200 />
            </section>

            <div class="space-y-3">
                {projects.get_value().into_iter().map(|p| view! { <ProjectRow project=p /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectRow(project: Project) -> impl IntoView {
    let status = if project.is_complete() { "Complete" } else { "In progress" };

    view! {
        <div class="flex items-center justify-between bg-primary-100 rounded-lg px-4 py-3">
            <div>
                <div class="font-medium">{project.name}</div>
                <div class="text-sm text-gray-500">{project.owner}</div>
            </div>
            <div class="text-right">
                <div class="font-bold">{format!("{}%", project.progress)}</div>
                <div class="text-xs text-gray-500">{status}</div>
            </div>
        </div>
    }
}
