//! Engine warnings routed through the `log` facade.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the HTML and CSS crates to report input they tolerate but do not
//! understand (for example an unknown `display` keyword).

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about an unsupported feature (emitted once per unique message)
///
/// The message is forwarded to [`log::warn!`] under the `tessera` log target,
/// prefixed with `component`.
///
/// # Example
/// ```ignore
/// warn_once("CSS", "unknown display keyword 'flex', treating as inline");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_emit = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_emit {
        log::warn!(target: "tessera", "[{component}] {message}");
    }
}

/// Returns `true` if `warn_once` has already seen this exact warning.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key))
}

/// Clear all recorded warnings (call before processing a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
