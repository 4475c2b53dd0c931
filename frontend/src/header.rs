//! Sticky site header: logo, theme toggle, mobile menu button, navigation.
//!
//! The inline nav row renders on desktop widths; below the breakpoint it is
//! replaced by the menu button and a dropdown panel gated by the menu flag,
//! so the flag can never show a panel on desktop.

use crate::state::ViewState;
use crate::theme;
use crate::tokens::*;
use shared::{Section, Theme};
use zoon::*;

pub fn header(view_state: ViewState, viewport_width: Mutable<u32>) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Background::new().color_signal(neutral_1()))
        .s(Shadows::new([Shadow::new()
            .y(2)
            .blur(8)
            .color("rgba(0, 0, 0, 0.08)")]))
        .update_raw_el(|raw_el| {
            raw_el
                .style("position", "sticky")
                .style("top", "0")
                .style("z-index", "100")
        })
        .item(top_row(view_state.clone(), viewport_width.clone()))
        .item(mobile_nav_panel(view_state, viewport_width))
}

fn top_row(view_state: ViewState, viewport_width: Mutable<u32>) -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_24).y(SPACING_12))
        .s(Gap::new().x(SPACING_16))
        .item(logo())
        .item(
            El::new().s(Align::new().right()).child_signal(
                viewport_width
                    .signal()
                    .map(|width| width >= MOBILE_BREAKPOINT)
                    .map({
                        let view_state = view_state.clone();
                        move |desktop| {
                            desktop.then(|| {
                                Row::new().s(Gap::new().x(SPACING_4)).items(
                                    Section::ALL
                                        .into_iter()
                                        .map(|section| nav_link(view_state.clone(), section)),
                                )
                            })
                        }
                    }),
            ),
        )
        .item(El::new().s(Align::new().right()).child(theme_toggle_button()))
        .item(
            El::new().s(Align::new().right()).child_signal(
                viewport_width
                    .signal()
                    .map(|width| width < MOBILE_BREAKPOINT)
                    .map({
                        let view_state = view_state.clone();
                        move |mobile| mobile.then(|| menu_button(view_state.clone()))
                    }),
            ),
        )
}

fn logo() -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_20)
            .weight(FontWeight::Bold)
            .color_signal(primary_7()))
        .child("Open Brain AI")
}

fn nav_link(view_state: ViewState, section: Section) -> impl Element {
    let is_active = view_state
        .active_section_signal()
        .map(move |active| active == section);
    Button::new()
        .s(Padding::new().x(SPACING_12).y(SPACING_8))
        .s(RoundedCorners::all(6))
        .s(Font::new().size(FONT_SIZE_16).weight(FontWeight::Medium))
        .s(Font::new().color_signal(
            is_active
                .map(|active| {
                    if active {
                        primary_7().boxed()
                    } else {
                        neutral_11().boxed()
                    }
                })
                .flatten(),
        ))
        .s(transition_colors())
        .label(section.label())
        .on_press(move || view_state.navigate_to(section))
}

fn theme_toggle_button() -> impl Element {
    Button::new()
        .s(Font::new().size(FONT_SIZE_18))
        .s(Padding::all(SPACING_8))
        .s(RoundedCorners::all(999))
        .s(Background::new().color_signal(neutral_3()))
        .s(transition_colors())
        .label_signal(theme::theme().map(|theme| match theme {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }))
        .on_press(theme::toggle_theme)
        .update_raw_el(|raw_el| raw_el.attr("aria-label", "Toggle dark/light theme"))
}

fn menu_button(view_state: ViewState) -> impl Element {
    let menu_open = view_state.menu_open_signal();
    Button::new()
        .s(Font::new().size(FONT_SIZE_18).color_signal(neutral_11()))
        .s(Padding::all(SPACING_8))
        .label_signal(menu_open.map(|open| if open { "✕" } else { "☰" }))
        .on_press(move || view_state.toggle_menu())
        .update_raw_el(|raw_el| raw_el.attr("aria-label", "Toggle navigation menu"))
}

/// Dropdown nav shown only while the viewport is mobile-sized and the menu
/// flag is set; navigation closes it through `navigate_to`.
fn mobile_nav_panel(view_state: ViewState, viewport_width: Mutable<u32>) -> impl Element {
    El::new().s(Width::fill()).child_signal(
        map_ref! {
            let width = viewport_width.signal(),
            let open = view_state.menu_open_signal() =>
            *width < MOBILE_BREAKPOINT && *open
        }
        .map({
            let view_state = view_state.clone();
            move |shown| {
                shown.then(|| {
                    Column::new()
                        .s(Width::fill())
                        .s(Padding::new().x(SPACING_24).y(SPACING_12))
                        .s(Gap::new().y(SPACING_4))
                        .items(
                            Section::ALL
                                .into_iter()
                                .map(|section| nav_link(view_state.clone(), section)),
                        )
                })
            }
        }),
    )
}
