//! Window scroll sampling and smooth scrolling.
//!
//! Scroll events are coalesced to at most one recomputation per animation
//! frame: a boolean latch is armed by the scroll listener and reset by the
//! `requestAnimationFrame` callback, so samples arriving faster than the
//! frame rate collapse to the latest one. No timer-based debounce.

use crate::state::ViewState;
use shared::{Section, SectionBounds};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Frame-boundary gate: at most one animation-frame request may be
/// outstanding, and the pending request's id is kept so teardown can cancel
/// it before the callback's closure is freed.
struct FrameLatch {
    pending: Cell<bool>,
    frame_id: Cell<Option<i32>>,
}

impl FrameLatch {
    fn new() -> Self {
        Self {
            pending: Cell::new(false),
            frame_id: Cell::new(None),
        }
    }

    /// Returns true when the caller owns this frame and should request one.
    fn arm(&self) -> bool {
        !self.pending.replace(true)
    }

    fn scheduled(&self, id: i32) {
        self.frame_id.set(Some(id));
    }

    /// Frame callback ran; the latch reopens for the next scroll event.
    fn fired(&self) {
        self.pending.set(false);
        self.frame_id.set(None);
    }

    /// Id of the still-pending frame request, if any, handed out once.
    fn take_scheduled(&self) -> Option<i32> {
        self.frame_id.take()
    }
}

/// Owns the window scroll listener for the lifetime of the page root.
/// Dropping the spy deregisters the listener and cancels any pending
/// animation-frame request, on every exit path.
pub struct ScrollSpy {
    on_scroll: Closure<dyn FnMut()>,
    _on_frame: Rc<Closure<dyn FnMut()>>,
    latch: Rc<FrameLatch>,
}

impl ScrollSpy {
    /// Registers the scroll listener and takes an immediate sample so the
    /// nav highlight is correct before the first scroll event fires.
    pub fn attach(view_state: ViewState) -> Self {
        let latch = Rc::new(FrameLatch::new());

        let on_frame = Rc::new(Closure::<dyn FnMut()>::new({
            let view_state = view_state.clone();
            let latch = latch.clone();
            move || {
                latch.fired();
                sample(&view_state);
            }
        }));

        let on_scroll = Closure::<dyn FnMut()>::new({
            let latch = latch.clone();
            let on_frame = on_frame.clone();
            move || {
                if !latch.arm() {
                    return;
                }
                if let Some(window) = web_sys::window() {
                    if let Ok(id) = window
                        .request_animation_frame(on_frame.as_ref().as_ref().unchecked_ref())
                    {
                        latch.scheduled(id);
                    }
                }
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        }
        sample(&view_state);

        Self {
            on_scroll,
            _on_frame: on_frame,
            latch,
        }
    }
}

impl Drop for ScrollSpy {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.on_scroll.as_ref().unchecked_ref(),
            );
            // A frame request left in flight would call into the freed
            // closure after this drop.
            if let Some(id) = self.latch.take_scheduled() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

fn sample(view_state: &ViewState) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let bounds = section_bounds_snapshot();
    view_state.sample_scroll(scroll_y, &bounds);
}

/// offsetTop/offsetHeight of every registry section currently in the DOM;
/// absent sections are skipped.
fn section_bounds_snapshot() -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let element = document
                .get_element_by_id(section.id())?
                .dyn_into::<web_sys::HtmlElement>()
                .ok()?;
            Some(SectionBounds::new(
                section,
                element.offset_top() as f64,
                element.offset_height() as f64,
            ))
        })
        .collect()
}

/// Smooth scroll to the section's top offset. A missing target element is a
/// silent no-op.
pub fn scroll_to_section(section: Section) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window
        .document()
        .and_then(|document| document.get_element_by_id(section.id()))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(element.offset_top() as f64);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::FrameLatch;

    #[test]
    fn latch_admits_one_frame_request_until_it_fires() {
        let latch = FrameLatch::new();
        assert!(latch.arm());
        assert!(!latch.arm());
        assert!(!latch.arm());
        latch.fired();
        assert!(latch.arm());
    }

    #[test]
    fn pending_frame_id_is_available_for_cancellation_exactly_once() {
        let latch = FrameLatch::new();
        assert!(latch.arm());
        latch.scheduled(7);
        assert_eq!(latch.take_scheduled(), Some(7));
        assert_eq!(latch.take_scheduled(), None);
    }

    #[test]
    fn fired_frame_leaves_nothing_to_cancel() {
        let latch = FrameLatch::new();
        assert!(latch.arm());
        latch.scheduled(3);
        latch.fired();
        assert_eq!(latch.take_scheduled(), None);
    }
}
