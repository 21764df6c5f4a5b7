//! Notice Component
//!
//! Short-lived confirmation message shown above the content.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::*;

/// How long a notice stays visible
const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Current notice, shared through context
#[derive(Clone, Copy)]
pub struct NoticeState {
    message: RwSignal<Option<String>>,
}

impl NoticeState {
    pub fn new() -> Self {
        Self {
            message: create_rw_signal(None),
        }
    }

    pub fn message(&self) -> Option<String> {
        self.message.get()
    }

    pub fn clear(&self) {
        self.message.set(None);
    }

    /// Show `message`, clearing it after a few seconds
    pub fn show(&self, message: &str) {
        self.message.set(Some(message.to_string()));

        let state = *self;
        let expected = message.to_string();
        Timeout::new(NOTICE_DURATION.as_millis() as u32, move || {
            // A newer notice keeps its own timer
            if state.message.get_untracked().as_deref() == Some(expected.as_str()) {
                state.clear();
            }
        })
        .forget();
    }
}

impl Default for NoticeState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notice() -> NoticeState {
    let state = NoticeState::new();
    provide_context(state);
    state
}

#[component]
pub fn Notice() -> impl IntoView {
    let state = expect_context::<NoticeState>();

    view! {
        <div class="fixed top-4 right-4 z-50">
            {move || {
                state.message().map(|msg| view! {
                    <div
                        class="flex items-center space-x-3 bg-green-600 text-white px-4 py-3 rounded-lg shadow-lg"
                        on:click=move |_| state.clear()
                    >
                        <span>"✓"</span>
                        <span class="text-sm font-medium">{msg}</span>
                    </div>
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear() {
        let runtime = create_runtime();

        let state = NoticeState::new();
        state.message.set(Some("Saved".to_string()));
        assert_eq!(state.message().as_deref(), Some("Saved"));
        state.clear();
        assert_eq!(state.message(), None);

        runtime.dispose();
    }
}
