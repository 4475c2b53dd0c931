//! Application root: wires the view state, the document theme attribute,
//! keyboard handling, and the scroll spy to the page layout.

use crate::state::ViewState;
use crate::tokens::*;
use crate::{footer, header, hero, scrolling, sections, theme};
use zoon::events::KeyDown;
use zoon::*;

pub struct SiteApp {
    view_state: ViewState,
    viewport_width: Mutable<u32>,
}

impl SiteApp {
    pub fn new() -> Self {
        theme::init_theme();
        Self {
            view_state: ViewState::new(),
            viewport_width: Mutable::new(0),
        }
    }

    /// Builds the page. The scroll listener lives exactly as long as the
    /// returned root element; removal tears it down.
    pub fn root(self) -> impl Element {
        let Self {
            view_state,
            viewport_width,
        } = self;
        let scroll_spy = scrolling::ScrollSpy::attach(view_state.clone());
        sync_document_theme();
        schedule_loaded_flag(view_state.clone());

        El::new()
            .s(Width::fill())
            .on_viewport_size_change({
                let viewport_width = viewport_width.clone();
                move |width, _height| viewport_width.set_neq(width)
            })
            .update_raw_el({
                let view_state = view_state.clone();
                move |raw_el| {
                    raw_el.global_event_handler(move |event: KeyDown| {
                        if event.key() == "Escape" {
                            view_state.close_menu();
                        }
                    })
                }
            })
            .child(
                Column::new()
                    .s(Width::fill())
                    .s(Font::new()
                        .family([FontFamily::new(FONT_FAMILY_SANS)])
                        .color_signal(neutral_11()))
                    .s(Background::new().color_signal(neutral_1()))
                    .item(header::header(view_state.clone(), viewport_width))
                    .item(hero::hero(view_state.clone()))
                    .item(sections::home::view())
                    .item(sections::about::view())
                    .item(sections::features::view())
                    .item(sections::cases::view())
                    .item(sections::downloads::view())
                    .item(footer::footer(view_state)),
            )
            .after_remove(move |_| drop(scroll_spy))
    }
}

/// Mirrors the current theme onto `<body data-theme="...">` so styling
/// outside the Zoon tree (scrollbars, selection) can follow it.
fn sync_document_theme() {
    Task::start(theme::theme().for_each_sync(|theme| {
        if let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
    }));
}

/// Flips the loaded flag just after the first paint so the entrance
/// transitions run instead of snapping to their final state.
fn schedule_loaded_flag(view_state: ViewState) {
    Task::start(async move {
        Timer::sleep(50).await;
        view_state.mark_loaded();
    });
}
