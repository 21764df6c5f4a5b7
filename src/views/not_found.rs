//! Not Found View

use leptos::*;
use leptos_router::{use_location, A};

use crate::router::AppRouter;

#[component]
pub fn NotFound() -> impl IntoView {
    let router = expect_context::<AppRouter>();
    let location = use_location().pathname;

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">
                "Nothing lives at " <code>{move || location.get()}</code>
            </p>
            <A
                href=router.href("Home", &[])
                class="px-6 py-3 bg-primary-400 text-white rounded-lg font-medium"
            >
                "Back to Home"
            </A>
        </div>
    }
}
