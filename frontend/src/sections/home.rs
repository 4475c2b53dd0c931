//! "Home" card: key features overview.

use crate::sections::section_container;
use crate::tokens::*;
use crate::typography;
use shared::Section;
use zoon::*;

pub fn view() -> impl Element {
    section_container(
        Section::Home,
        Column::new()
            .s(Gap::new().y(SPACING_20))
            .item(typography::section_heading("Key ", "Features"))
            .item(typography::paragraph(
                "Empowering Language Analysis with Cutting-Edge AI",
            ))
            .item(
                Row::new()
                    .s(Gap::new().x(SPACING_20).y(SPACING_20))
                    .multiline()
                    .item(feature(
                        "HIPAA and GDPR",
                        "Open Brain AI is now run locally to ensure compliance with \
                         stringent data privacy and security regulations, including the \
                         Health Insurance Portability and Accountability Act (HIPAA) in \
                         the United States and the General Data Protection Regulation \
                         (GDPR) in the European Union.",
                    ))
                    .item(language_analysis_feature())
                    .item(feature(
                        "Multilingual Support",
                        "OBAI offers tools for a wide range of languages, including \
                         English, Danish, Dutch, Finnish, French, German, Greek, Italian, \
                         Norwegian, Polish, Portuguese, Romanian, Russian, Spanish, and \
                         Swedish.",
                    )),
            ),
    )
}

fn feature(title: &'static str, body: &'static str) -> impl Element {
    crate::reveal::reveal_on_scroll(
        Width::fill().min(240),
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_8))
            .item(typography::h3(title))
            .item(typography::paragraph(body)),
    )
}

fn language_analysis_feature() -> impl Element {
    crate::reveal::reveal_on_scroll(Width::fill().min(240), language_analysis_body())
}

fn language_analysis_body() -> impl Element {
    let items = [
        "Audio transcription",
        "Automatic translation",
        "Grammar error correction",
        "Transcription to the International Phonetic Alphabet (IPA)",
        "Readability scoring",
        "Phonology, morphology, syntax, semantic, and lexical measures",
    ];
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_8))
        .item(typography::h3("Language Analysis"))
        .item(
            Column::new()
                .s(Gap::new().y(SPACING_4))
                .items(items.into_iter().map(|item| {
                    Paragraph::new()
                        .s(Font::new()
                            .size(FONT_SIZE_16)
                            .line_height(LINE_HEIGHT_160)
                            .color_signal(neutral_11()))
                        .content("• ")
                        .content(item)
                })),
        )
}
