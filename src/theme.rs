//! Theme
//!
//! Design tokens live in `tailwind.config.js` and are compiled by Trunk.
//! This module holds what Tailwind cannot provide: the route transition
//! animations (injected once at startup), the class-based dark-mode toggle,
//! and the palette the canvas charts paint with.

/// Id of the injected `<style>` element
pub const STYLESHEET_ID: &str = "dashboard-theme";

/// Class toggled on the document element to enable dark mode
pub const DARK_CLASS: &str = "dark";

/// Primary scale, lightest first (`primary-*` in the Tailwind config)
pub const PRIMARY: [(u16, &str); 5] = [
    (100, "#a9c3ea"),
    (200, "#93b5e5"),
    (300, "#7ba7e0"),
    (400, "#428bd5"),
    (500, "#077ad9"),
];

/// `cardBackgroundDark` in the Tailwind config
pub const CARD_BACKGROUND_DARK: &str = "#0e1f38";

/// `secondaryText` in the Tailwind config
pub const SECONDARY_TEXT: &str = "#9399A1";

/// Keyframes and enter classes for the route transitions
pub fn stylesheet() -> String {
    "@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }\n\
     @keyframes slide-left-in { from { transform: translateX(100%); opacity: 0; } \
     to { transform: translateX(0); opacity: 1; } }\n\
     @keyframes slide-right-in { from { transform: translateX(-100%); opacity: 0; } \
     to { transform: translateX(0); opacity: 1; } }\n\
     .fade-enter-active { animation: fade-in 0.3s ease-out; }\n\
     .slide-left-enter-active { animation: slide-left-in 0.3s ease-out; }\n\
     .slide-right-enter-active { animation: slide-right-in 0.3s ease-out; }\n"
        .to_string()
}

/// Inject the transition stylesheet into `<head>` once
pub fn install_stylesheet() -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;

    if document.get_element_by_id(STYLESHEET_ID).is_some() {
        return Ok(());
    }

    let style = document
        .create_element("style")
        .map_err(|e| format!("Failed to create style element: {:?}", e))?;
    style.set_id(STYLESHEET_ID);
    style.set_text_content(Some(&stylesheet()));

    let head = document.head().ok_or("No <head> element")?;
    head.append_child(&style)
        .map_err(|e| format!("Failed to append stylesheet: {:?}", e))?;
    Ok(())
}

/// Toggle dark mode on the document element; returns the new state
pub fn toggle_dark_mode() -> bool {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return false;
    };

    root.class_list().toggle(DARK_CLASS).unwrap_or(false)
}
