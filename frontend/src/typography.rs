//! Typography helpers shared by the content sections.

use crate::tokens::*;
use zoon::*;

/// Section heading with the trailing word in the primary accent color,
/// e.g. "Key **Features**".
pub fn section_heading(plain: impl Into<String>, highlighted: impl Into<String>) -> impl Element {
    Paragraph::new()
        .s(Font::new()
            .size(FONT_SIZE_30)
            .weight(FontWeight::Bold)
            .color_signal(neutral_12()))
        .content(plain.into())
        .content(
            El::new()
                .s(Font::new().color_signal(primary_7()))
                .child(highlighted.into()),
        )
}

pub fn h3(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_20)
            .weight(FontWeight::SemiBold)
            .color_signal(neutral_12()))
        .child(Text::new(text.into()))
}

pub fn paragraph(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_16)
            .line_height(LINE_HEIGHT_160)
            .color_signal(neutral_11()))
        .child(Text::new(text.into()))
}

pub fn small(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_14)
            .line_height(LINE_HEIGHT_140)
            .color_signal(neutral_8()))
        .child(Text::new(text.into()))
}
