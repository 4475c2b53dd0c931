//! Scroll-into-view entrance for content cards.
//!
//! Each wrapped card fades and slides in the first time it crosses the
//! reveal line near the bottom of the viewport. One `IntersectionObserver`
//! per card; the observer disconnects after the first reveal and on element
//! removal.

use crate::tokens::DURATION_SLOW;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use zoon::*;

/// The card reveals once its top clears this distance above the viewport's
/// bottom edge.
const REVEAL_MARGIN: &str = "0px 0px -150px 0px";

/// The wrapper takes the card's width style so grid rows lay out the same as
/// without the reveal; the wrapped element should fill it.
pub fn reveal_on_scroll(width: Width, element: impl Element) -> impl Element {
    let revealed = Mutable::new(false);
    let observer: Rc<RefCell<Option<ObserverHandle>>> = Rc::new(RefCell::new(None));

    El::new()
        .s(width)
        .update_raw_el({
            let revealed = revealed.clone();
            let observer = observer.clone();
            move |raw_el| {
                let target = raw_el.dom_element();
                *observer.borrow_mut() = ObserverHandle::observe(&target, revealed.clone());
                let transition = format!(
                    "opacity {DURATION_SLOW}ms ease-out, transform {DURATION_SLOW}ms ease-out"
                );
                raw_el
                    .style("transition", &transition)
                    .style_signal(
                        "opacity",
                        revealed.signal().map(|shown| if shown { "1" } else { "0" }),
                    )
                    .style_signal(
                        "transform",
                        revealed.signal().map(|shown| {
                            if shown {
                                "translateY(0)"
                            } else {
                                "translateY(24px)"
                            }
                        }),
                    )
            }
        })
        .after_remove(move |_| {
            observer.borrow_mut().take();
        })
        .child(element)
}

/// Keeps the observer and its callback alive together; dropping the handle
/// disconnects the observer before the callback's closure is freed.
struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl ObserverHandle {
    fn observe(target: &web_sys::HtmlElement, revealed: Mutable<bool>) -> Option<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let crossed = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<web_sys::IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if crossed {
                    revealed.set_neq(true);
                    observer.disconnect();
                }
            },
        );
        let options = web_sys::IntersectionObserverInit::new();
        options.set_root_margin(REVEAL_MARGIN);
        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;
        observer.observe(target);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
