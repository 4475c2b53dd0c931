//! Hero banner with the staggered entrance animation.
//!
//! Each animated block waits for the loaded flag, then its own delay step,
//! before fading and sliding in; the ladder mirrors the original site's
//! animation-delay sequence.

use crate::state::ViewState;
use crate::tokens::*;
use crate::typography;
use zoon::*;

pub fn hero(view_state: ViewState) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Background::new().color_signal(primary_2()))
        .s(Padding::new().x(SPACING_24).y(SPACING_64))
        .s(Gap::new().y(SPACING_20))
        .item(title(&view_state))
        .item(animate_in(
            &view_state,
            4 * ENTRANCE_STAGGER,
            El::new()
                .s(Align::new().center_x())
                .s(Font::new()
                    .size(FONT_SIZE_24)
                    .weight(FontWeight::SemiBold)
                    .color_signal(neutral_11()))
                .child("version 2"),
        ))
        .item(animate_in(
            &view_state,
            3 * ENTRANCE_STAGGER,
            tagline_block(),
        ))
        .item(animate_in(
            &view_state,
            3 * ENTRANCE_STAGGER,
            credits_block(),
        ))
        .item(animate_in(
            &view_state,
            ENTRANCE_STAGGER + ENTRANCE_STAGGER / 2,
            hero_buttons(view_state.clone()),
        ))
}

fn title(view_state: &ViewState) -> impl Element {
    Row::new()
        .s(Align::new().center_x())
        .s(Gap::new().x(SPACING_12))
        .item(animate_in(view_state, 0, title_word("Open")))
        .item(animate_in(view_state, ENTRANCE_STAGGER, title_word("Brain")))
        .item(animate_in(
            view_state,
            2 * ENTRANCE_STAGGER,
            title_word("AI"),
        ))
}

fn title_word(word: &'static str) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_56)
            .weight(FontWeight::Bold)
            .color_signal(neutral_12()))
        .child(word)
}

fn tagline_block() -> impl Element {
    Column::new()
        .s(Width::fill().max(720))
        .s(Align::new().center_x())
        .s(Gap::new().y(SPACING_12))
        .item(typography::paragraph(
            "A dynamic academic platform providing AI tools and resources to support \
             the work of clinicians, educators, and researchers.",
        ))
        .item(typography::paragraph(
            "The Open Brain AI version 1 is currently sleeping. We are transitioning \
             into Open Brain AI v.2 (expected release day May 15, 2025).",
        ))
}

fn credits_block() -> impl Element {
    Paragraph::new()
        .s(Width::fill().max(720))
        .s(Align::new().center_x())
        .s(Font::new()
            .size(FONT_SIZE_16)
            .line_height(LINE_HEIGHT_160)
            .color_signal(neutral_11()))
        .content("Developed by ")
        .content(credit_link(
            "Charalambos (Haris) Themistocleous",
            "http://charalambosthemistocleous.com",
        ))
        .content(", ")
        .content(credit_link(
            "Department of Special Needs Education",
            "https://www.uv.uio.no/isp/english/",
        ))
        .content(", ")
        .content(credit_link(
            "Faculty of Educational Sciences",
            "https://www.uv.uio.no/english/",
        ))
        .content(", ")
        .content(credit_link(
            "University of Oslo",
            "https://www.uio.no/english/",
        ))
        .content(".")
}

fn credit_link(label: &'static str, url: &'static str) -> impl Element {
    Link::new()
        .s(Font::new().color_signal(primary_7()).italic())
        .label(label)
        .to(url)
        .new_tab(NewTab::new())
}

fn hero_buttons(view_state: ViewState) -> impl Element {
    Row::new()
        .s(Align::new().center_x())
        .s(Gap::new().x(SPACING_16))
        .item(
            Button::new()
                .s(Padding::new().x(SPACING_24).y(SPACING_12))
                .s(RoundedCorners::all(8))
                .s(Background::new().color_signal(primary_7()))
                .s(Font::new()
                    .weight(FontWeight::SemiBold)
                    .color_signal(accent_on_primary()))
                .s(transition_colors())
                .label("Learn More")
                .on_press({
                    let view_state = view_state.clone();
                    // "portfolio" is not in the registry, so this click is a
                    // no-op, same as on the original site.
                    move || view_state.navigate_to_id("portfolio")
                }),
        )
        .item(
            Button::new()
                .s(Padding::new().x(SPACING_24).y(SPACING_12))
                .s(RoundedCorners::all(8))
                .s(Borders::all_signal(
                    primary_7().map(|color| Border::new().width(1).color(color)),
                ))
                .s(Font::new()
                    .weight(FontWeight::SemiBold)
                    .color_signal(primary_7()))
                .s(transition_colors())
                .label("Downloads")
                .on_press(move || view_state.navigate_to(shared::Section::Downloads)),
        )
}

/// Wraps `element` in an opacity/translate entrance gated by the loaded flag
/// plus `delay_ms`.
fn animate_in(view_state: &ViewState, delay_ms: u32, element: impl Element) -> impl Element {
    let revealed = Mutable::new(false);
    Task::start({
        let revealed = revealed.clone();
        let loaded = view_state.is_loaded_signal();
        async move {
            loaded.wait_for(true).await;
            Timer::sleep(delay_ms).await;
            revealed.set(true);
        }
    });
    El::new()
        .update_raw_el(move |raw_el| {
            let transition =
                format!("opacity {DURATION_SLOW}ms ease-out, transform {DURATION_SLOW}ms ease-out");
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
                            "translateY(16px)"
                        }
                    }),
                )
        })
        .child(element)
}
