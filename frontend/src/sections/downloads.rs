//! "Downloads" card: resources, two of them still pending release.

use crate::sections::{section_container, service_card};
use crate::tokens::*;
use crate::typography;
use shared::Section;
use zoon::*;

pub fn view() -> impl Element {
    section_container(
        Section::Downloads,
        Column::new()
            .s(Gap::new().y(SPACING_20))
            .item(typography::section_heading("Downloads & ", "Resources"))
            .item(typography::paragraph(
                "Access essential tools and resources to enhance your experience \
                 with Open Brain AI.",
            ))
            .item(
                Row::new()
                    .s(Gap::new().x(SPACING_20).y(SPACING_20))
                    .multiline()
                    .item(coming_soon_card(
                        "📊",
                        "Advanced Clinical Tools",
                        "BETA",
                        "Download the standalone application for in-depth grammar, \
                         spelling, and phonology analysis.",
                    ))
                    .item(coming_soon_card(
                        "📖",
                        "OBAI User Manual",
                        "PDF",
                        "A comprehensive guide to using the Open Brain AI platform \
                         and its features.",
                    ))
                    .item(support_card()),
            )
            .item(typography::small(
                "We are working hard to bring you these resources. Thank you for \
                 your patience!",
            )),
    )
}

fn coming_soon_card(
    icon: &'static str,
    title: &'static str,
    badge: &'static str,
    body: &'static str,
) -> impl Element {
    service_card(
        icon,
        titled_with_badge(title, badge),
        Column::new()
            .s(Gap::new().y(SPACING_12))
            .item(typography::paragraph(body))
            .item(disabled_button("Coming Soon"))
            .item(typography::small("Available by May 15th, 2025")),
    )
}

fn support_card() -> impl Element {
    service_card(
        "❓",
        typography::h3("Support & FAQs"),
        Column::new()
            .s(Gap::new().y(SPACING_12))
            .item(typography::paragraph(
                "Find answers to common questions and get assistance with Open \
                 Brain AI.",
            ))
            .item(
                Link::new()
                    .s(Padding::new().x(SPACING_16).y(SPACING_8))
                    .s(RoundedCorners::all(8))
                    .s(Background::new().color_signal(primary_7()))
                    .s(Font::new()
                        .weight(FontWeight::SemiBold)
                        .color_signal(accent_on_primary()))
                    .label("Visit Support Page")
                    .to("/support"),
            ),
    )
}

fn titled_with_badge(title: &'static str, badge: &'static str) -> impl Element {
    Row::new()
        .s(Gap::new().x(SPACING_8))
        .item(typography::h3(title))
        .item(
            El::new()
                .s(Padding::new().x(SPACING_8).y(SPACING_4))
                .s(RoundedCorners::all(999))
                .s(Background::new().color_signal(primary_5()))
                .s(Font::new()
                    .size(FONT_SIZE_14)
                    .weight(FontWeight::SemiBold)
                    .color_signal(accent_on_primary()))
                .child(badge),
        )
}

fn disabled_button(label: &'static str) -> impl Element {
    El::new()
        .s(Padding::new().x(SPACING_16).y(SPACING_8))
        .s(RoundedCorners::all(8))
        .s(Background::new().color_signal(neutral_4()))
        .s(Font::new()
            .weight(FontWeight::SemiBold)
            .color_signal(neutral_6()))
        .s(Align::new().left())
        .update_raw_el(|raw_el| raw_el.attr("aria-disabled", "true"))
        .child(label)
}
