//! Theme state and persistence.
//!
//! The persisted value wins over the system color-scheme signal, which wins
//! over the `Light` default. Storage failures degrade to a session-only
//! theme; nothing here can fail from a caller's point of view.

use shared::{THEME_STORAGE_KEY, Theme, resolve_theme};
use zoon::*;

static THEME: Lazy<Mutable<Theme>> = Lazy::new(|| Mutable::new(Theme::Light));

/// Seeds the theme once at startup, before the first render.
pub fn init_theme() {
    THEME.set(resolve_theme(stored_theme().as_deref(), system_prefers_dark()));
}

/// Current theme as a signal for reactive styling.
pub fn theme() -> impl Signal<Item = Theme> {
    THEME.signal()
}

/// Flips the theme and persists the new value under the fixed key.
pub fn toggle_theme() {
    let new_theme = THEME.get().toggled();
    THEME.set(new_theme);
    let _ = local_storage().insert(THEME_STORAGE_KEY, new_theme.as_str());
}

/// Raw persisted value; a missing or unreadable entry is simply absent.
fn stored_theme() -> Option<String> {
    match local_storage().get(THEME_STORAGE_KEY) {
        Some(Ok(value)) => Some(value),
        _ => None,
    }
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
        })
        .is_some_and(|query| query.matches())
}
