//! App Root Component
//!
//! Root component with the shell layout and context providers, and the
//! DOM mount target used at startup.

use leptos::*;
use leptos_router::Router;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::bootstrap::{AppContext, MountTarget};
use crate::charts::provide_charts;
use crate::components::{provide_notice, Header, Notice, Sidebar};
use crate::error::{BootstrapError, BootstrapResult};
use crate::router::RouteTree;
use crate::routes;
use crate::state::provide_runtime_store;
use crate::theme;
use crate::views::profiles::provide_profile_book;

/// Root application component
#[component]
pub fn App(context: AppContext) -> impl IntoView {
    provide_runtime_store(context.store);
    provide_context(context.router);
    provide_charts(context.charts);
    provide_profile_book();
    provide_notice();

    view! {
        <Router>
            <div class="min-h-screen flex flex-col md:flex-row font-content bg-appBackground text-primaryText dark:bg-appBackgroundDark dark:text-primaryTextDark">
                <Sidebar />
                <div class="flex-1 flex flex-col">
                    <Header />
                    <main class="flex-1 p-8 overflow-hidden">
                        <RouteTree fallback=routes::not_found />
                    </main>
                </div>
                <Notice />
            </div>
        </Router>
    }
}

/// Mounts the app into the element with id `mount_id`
#[derive(Clone, Debug)]
pub struct DomMount {
    mount_id: String,
}

impl DomMount {
    pub fn new(mount_id: &str) -> Self {
        Self {
            mount_id: mount_id.to_string(),
        }
    }

    fn parent(&self) -> BootstrapResult<HtmlElement> {
        document()
            .get_element_by_id(&self.mount_id)
            .ok_or_else(|| BootstrapError::MountPointMissing(self.mount_id.clone()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| BootstrapError::Dom(format!("#{} is not an HTML element", self.mount_id)))
    }
}

impl MountTarget for DomMount {
    fn mount(&mut self, context: AppContext) -> BootstrapResult<()> {
        let parent = self.parent()?;
        theme::install_stylesheet().map_err(BootstrapError::Dom)?;

        tracing::debug!(mount_id = %self.mount_id, "mounting app");
        mount_to(parent, move || view! { <App context=context /> });
        Ok(())
    }
}
