//! Desktop clipboard access.

/// Copy `text` to the system clipboard.
///
/// Returns false when no clipboard is available (headless sessions, some
/// Wayland compositors); the failure is logged and callers still show
/// their "copied" feedback.
pub fn copy_text(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard write failed");
                false
            }
        },
        Err(e) => {
            tracing::warn!("Clipboard not available: {}", e);
            false
        }
    }
}
