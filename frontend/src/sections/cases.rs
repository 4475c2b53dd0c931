//! "Cases" card: real-world application tiles.

use crate::sections::section_container;
use crate::tokens::*;
use crate::typography;
use shared::Section;
use zoon::*;

const CASES: [(&str, &str); 5] = [
    ("PPA Subtyping", "Research • Neurology"),
    ("MCI Assessment", "Clinical • Diagnostics"),
    ("Aphasia Analysis", "Research • Therapy"),
    ("Clinical Reporting", "Clinical • Workflow"),
    ("Language Education", "Education • Accessibility"),
];

pub fn view() -> impl Element {
    section_container(
        Section::Cases,
        Column::new()
            .s(Gap::new().y(SPACING_20))
            .item(typography::section_heading("Application ", "Cases"))
            .item(typography::paragraph(
                "Explore how Open Brain AI is applied in real-world scenarios to \
                 advance research, clinical practice, and language analysis.",
            ))
            .item(
                Row::new()
                    .s(Gap::new().x(SPACING_20).y(SPACING_20))
                    .multiline()
                    .items(CASES.into_iter().map(|(title, domain)| tile(title, domain))),
            ),
    )
}

fn tile(title: &'static str, domain: &'static str) -> impl Element {
    crate::reveal::reveal_on_scroll(Width::exact(300), tile_body(title, domain))
}

fn tile_body(title: &'static str, domain: &'static str) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(RoundedCorners::all(12))
        .s(Clip::both())
        .s(Borders::all_signal(
            neutral_4().map(|color| Border::new().width(1).color(color)),
        ))
        .item(
            El::new()
                .s(Width::fill())
                .s(Height::exact(160))
                .s(Background::new().color_signal(primary_3()))
                .s(Align::center())
                .child(
                    El::new()
                        .s(Font::new().size(FONT_SIZE_14).color_signal(primary_9()))
                        .child("measures demo"),
                ),
        )
        .item(
            Column::new()
                .s(Padding::all(SPACING_16))
                .s(Gap::new().y(SPACING_4))
                .s(Background::new().color_signal(neutral_1()))
                .item(typography::h3(title))
                .item(typography::small(domain)),
        )
}
