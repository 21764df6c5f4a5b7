//! Navigation Components
//!
//! Sidebar with the route links and the header bar with the client name
//! and dark-mode toggle.

use leptos::*;
use leptos_router::A;

use crate::router::{AppRouter, ACTIVE_LINK_CLASS};
use crate::state::RuntimeStore;
use crate::theme;

/// Sidebar navigation
#[component]
pub fn Sidebar() -> impl IntoView {
    let router = expect_context::<AppRouter>();

    let links = [
        ("Home", "Home", "🏠"),
        ("projects", "Projects", "📁"),
        ("Manage Orders", "Orders", "📦"),
        ("Manage Profiles", "Profiles", "👤"),
        ("ProgressBarTest", "Progress", "⏳"),
    ];

    view! {
        <aside class="md:w-64 shrink-0 bg-sidebarBackground dark:bg-sidebarBackgroundDark p-4 space-y-2">
            {links
                .into_iter()
                .map(|(name, label, icon)| {
                    // The root link would otherwise match every location
                    let exact = name == "Home";
                    view! { <NavLink href=router.href(name, &[]) label=label icon=icon exact=exact /> }
                })
                .collect_view()}
        </aside>
    }
}

#[component]
fn NavLink(
    href: String,
    label: &'static str,
    icon: &'static str,
    exact: bool,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=exact
            class="flex items-center space-x-3 px-4 py-2 hover:bg-primary-300 transition-colors"
            active_class=ACTIVE_LINK_CLASS
        >
            <span>{icon}</span>
            <span>{label}</span>
        </A>
    }
}

/// Header bar
#[component]
pub fn Header() -> impl IntoView {
    let store = expect_context::<RuntimeStore>();
    let (dark, set_dark) = create_signal(false);

    // Configured name wins over the store field
    let client_name = move || {
        store
            .config_options
            .with(|c| c.client_name().map(str::to_string))
            .unwrap_or_else(|| store.client_name.get())
    };

    view! {
        <header class="flex items-center justify-between h-16 px-6 border-b border-primary-100">
            <h1 class="text-xl font-display font-bold">{client_name}</h1>
            <button
                class="px-3 py-1 rounded-lg bg-primary-200 hover:bg-primary-300"
                on:click=move |_| set_dark.set(theme::toggle_dark_mode())
            >
                {move || if dark.get() { "☀ Light" } else { "🌙 Dark" }}
            </button>
        </header>
    }
}
