//! Progress Bar Test View
//!
//! Scratch page for the progress bar styles; a slider drives every bar.

use leptos::*;

/// Width style for a bar at `percent`, clamped to 0..=100
fn bar_width(percent: i32) -> String {
    format!("width: {}%", percent.clamp(0, 100))
}

#[component]
pub fn ProgressBarTestView() -> impl IntoView {
    let (percent, set_percent) = create_signal(40);

    let shades = [100u16, 200, 300, 400, 500];

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Progress Bars"</h1>

            <label class="block">
                <span class="text-sm text-gray-400">{move || format!("{}%", percent.get())}</span>
                <input
                    type="range"
                    min="0"
                    max="100"
                    class="w-full"
                    prop:value=move || percent.get()
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<i32>() {
                            set_percent.set(value);
                        }
                    }
                />
            </label>

            {shades
                .into_iter()
                .map(|shade| view! {
                    <div class="h-4 rounded-full bg-secondary-100 overflow-hidden">
                        <div
                            class=format!("h-full bg-primary-{} transition-all", shade)
                            style=move || bar_width(percent.get())
                        />
                    </div>
                })
                .collect_view()}
        </div>
    }
}
