//! View-state controller.
//!
//! One `ViewState` instance owns the transient UI state (active section,
//! mobile menu flag, loaded flag) and every mutation goes through a named
//! operation here. All operations are total; none reports an error.

use shared::{Section, SectionBounds, section_at};
use zoon::*;

#[derive(Clone, Default)]
pub struct ViewState {
    active_section: Mutable<Section>,
    menu_open: Mutable<bool>,
    is_loaded: Mutable<bool>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_section_signal(&self) -> impl Signal<Item = Section> {
        self.active_section.signal()
    }

    pub fn menu_open_signal(&self) -> impl Signal<Item = bool> {
        self.menu_open.signal()
    }

    pub fn is_loaded_signal(&self) -> impl Signal<Item = bool> {
        self.is_loaded.signal()
    }

    /// Applies one coalesced scroll sample. When the probe line misses every
    /// section (above the first, below the last) the previous selection is
    /// kept rather than reset.
    pub fn sample_scroll(&self, scroll_y: f64, bounds: &[SectionBounds]) {
        if let Some(section) = section_at(scroll_y, bounds) {
            self.active_section.set_neq(section);
        }
    }

    /// Nav-link click: select the section, close the mobile menu and smooth
    /// scroll to the target. A missing DOM node skips only the scroll.
    pub fn navigate_to(&self, section: Section) {
        self.navigate_to_with(section, crate::scrolling::scroll_to_section);
    }

    fn navigate_to_with(&self, section: Section, scroll_to: impl FnOnce(Section)) {
        self.active_section.set_neq(section);
        self.menu_open.set_neq(false);
        scroll_to(section);
    }

    /// String-id entry point for anchor-style callers. An id outside the
    /// section registry is a complete no-op.
    pub fn navigate_to_id(&self, id: &str) {
        if let Some(section) = Section::from_id(id) {
            self.navigate_to(section);
        }
    }

    pub fn toggle_menu(&self) {
        self.menu_open.set(!self.menu_open.get());
    }

    /// Escape-key handler; redundant calls are harmless.
    pub fn close_menu(&self) {
        self.menu_open.set_neq(false);
    }

    /// One-way false -> true transition, fired once after mount to gate
    /// entrance styling.
    pub fn mark_loaded(&self) {
        self.is_loaded.set_neq(true);
    }
}

#[cfg(test)]
mod tests {
    use super::ViewState;
    use shared::{Section, SectionBounds};
    use std::cell::Cell;

    #[test]
    fn menu_survives_toggle_and_redundant_closes() {
        let state = ViewState::new();
        state.toggle_menu();
        assert!(state.menu_open.get());
        state.close_menu();
        state.close_menu();
        assert!(!state.menu_open.get());
    }

    #[test]
    fn unknown_navigation_id_changes_nothing() {
        let state = ViewState::new();
        state.toggle_menu();
        state.navigate_to_id("portfolio");
        assert_eq!(state.active_section.get(), Section::Home);
        assert!(state.menu_open.get());
    }

    #[test]
    fn navigation_selects_closes_menu_and_scrolls_once() {
        let state = ViewState::new();
        state.toggle_menu();
        let scrolls = Cell::new(0);
        state.navigate_to_with(Section::Features, |_| scrolls.set(scrolls.get() + 1));
        assert_eq!(state.active_section.get(), Section::Features);
        assert!(!state.menu_open.get());
        assert_eq!(scrolls.get(), 1);
    }

    #[test]
    fn missed_scroll_sample_keeps_previous_selection() {
        let state = ViewState::new();
        let bounds = [SectionBounds::new(Section::About, 800.0, 800.0)];
        state.sample_scroll(900.0, &bounds);
        assert_eq!(state.active_section.get(), Section::About);
        state.sample_scroll(5000.0, &bounds);
        assert_eq!(state.active_section.get(), Section::About);
    }

    #[test]
    fn loaded_flag_is_one_way() {
        let state = ViewState::new();
        assert!(!state.is_loaded.get());
        state.mark_loaded();
        state.mark_loaded();
        assert!(state.is_loaded.get());
    }
}
