//! Content sections, one module per registry entry.

use crate::tokens::*;
use shared::Section;
use zoon::*;

pub mod about;
pub mod cases;
pub mod downloads;
pub mod features;
pub mod home;

/// Anchored wrapper around a section card. The DOM id feeds the nav anchors,
/// the smooth-scroll targets, and the scroll-spy bounds snapshot.
pub fn section_container(section: Section, content: impl Element) -> impl Element {
    El::new()
        .update_raw_el(move |raw_el| raw_el.attr("id", section.id()))
        .s(Width::fill())
        .s(Padding::new().x(SPACING_24).y(SPACING_48))
        .child(
            El::new()
                .s(Width::fill().max(CONTENT_MAX_WIDTH))
                .s(Align::new().center_x())
                .s(Background::new().color_signal(neutral_2()))
                .s(RoundedCorners::all(16))
                .s(Shadows::new([Shadow::new()
                    .y(8)
                    .blur(24)
                    .color("rgba(0, 0, 0, 0.08)")]))
                .s(Padding::all(SPACING_32))
                .child(content),
        )
}

/// Icon-and-copy card used by the features and downloads grids; enters with
/// the scroll-into-view reveal.
pub fn service_card(
    icon: &'static str,
    title: impl Element,
    body: impl Element,
) -> impl Element {
    crate::reveal::reveal_on_scroll(
        Width::fill().min(220).max(320),
        card_body(icon, title, body),
    )
}

fn card_body(icon: &'static str, title: impl Element, body: impl Element) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Padding::all(SPACING_24))
        .s(Gap::new().y(SPACING_12))
        .s(Background::new().color_signal(neutral_1()))
        .s(RoundedCorners::all(12))
        .s(Borders::all_signal(
            neutral_4().map(|color| Border::new().width(1).color(color)),
        ))
        .s(transition_transform())
        .item(
            El::new()
                .s(Font::new().size(FONT_SIZE_30).color_signal(primary_7()))
                .child(icon),
        )
        .item(title)
        .item(body)
}
