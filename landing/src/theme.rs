//! Dark-mode preference: one process-wide boolean, persisted to
//! localStorage and mirrored as a `dark` class on the document root.

const STORAGE_KEY: &str = "dark";

/// Read the stored preference. Missing key or unavailable storage (private
/// browsing) falls back to light mode.
pub fn stored_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// Apply the flag to the document root and persist it. Storage failures
/// (quota, private mode) are ignored; the page still themes correctly for
/// the current visit.
pub fn apply_dark(dark: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let _ = if dark {
            root.class_list().add_1("dark")
        } else {
            root.class_list().remove_1("dark")
        };
    }
    if let Some(storage) = window.local_storage().ok().flatten() {
        let _ = storage.set_item(STORAGE_KEY, if dark { "true" } else { "false" });
    }
}
