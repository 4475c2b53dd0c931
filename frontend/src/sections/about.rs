//! "About" card: project story, stats, editor preview.

use crate::sections::section_container;
use crate::tokens::*;
use crate::typography;
use shared::Section;
use zoon::*;

pub fn view() -> impl Element {
    section_container(
        Section::About,
        Column::new()
            .s(Gap::new().y(SPACING_20))
            .item(typography::section_heading("About ", "Open Brain AI"))
            .item(
                Row::new()
                    .s(Gap::new().x(SPACING_32).y(SPACING_32))
                    .multiline()
                    .item(story_column())
                    .item(preview_column()),
            ),
    )
}

fn story_column() -> impl Element {
    Column::new()
        .s(Width::fill().min(320))
        .s(Gap::new().y(SPACING_16))
        .item(typography::paragraph(
            "Open Brain AI (OBAI) was born out of a vision to automate language \
             analysis in clinical and research settings, recognizing the \
             time-consuming and labor-intensive nature of traditional \
             neurolinguistic assessments.",
        ))
        .item(
            Paragraph::new()
                .s(Font::new()
                    .size(FONT_SIZE_16)
                    .line_height(LINE_HEIGHT_160)
                    .color_signal(neutral_11()))
                .content("The project is being actively developed by ")
                .content(
                    Link::new()
                        .s(Font::new().color_signal(primary_7()).italic())
                        .label("Charalambos (Haris) Themistocleous")
                        .to("http://charalambosthemistocleous.com")
                        .new_tab(NewTab::new()),
                )
                .content(
                    " at the Department of Special Needs Education, University of \
                     Oslo. It is supported by a team of experts in artificial \
                     intelligence, linguistics, and healthcare set out to develop a \
                     cutting-edge computational platform that could automate and \
                     enhance these critical processes.",
                ),
        )
        .item(typography::paragraph(
            "Researchers, educators, and clinicians who want to learn more about \
             the features or have feature requests, please email us at \
             charalth@uio.no.",
        ))
        .item(stats_row())
}

fn stats_row() -> impl Element {
    Row::new()
        .s(Gap::new().x(SPACING_32).y(SPACING_16))
        .multiline()
        .item(stat("15+", "Supported Languages"))
        .item(stat("8+", "Language Domains"))
        .item(stat("40+", "Application Areas"))
}

fn stat(number: &'static str, label: &'static str) -> impl Element {
    Column::new()
        .s(Gap::new().y(SPACING_4))
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_36)
                    .weight(FontWeight::Bold)
                    .color_signal(primary_7()))
                .child(number),
        )
        .item(typography::small(label))
}

fn preview_column() -> impl Element {
    El::new()
        .s(Width::fill().min(280))
        .s(Align::new().center_y())
        .child(
            El::new()
                .s(Width::fill())
                .s(Height::exact(260))
                .s(Background::new().color_signal(primary_3()))
                .s(RoundedCorners::all(16))
                .s(Align::center())
                .child(
                    El::new()
                        .s(Font::new()
                            .size(FONT_SIZE_16)
                            .weight(FontWeight::Medium)
                            .color_signal(primary_9()))
                        .child("OBAI editor preview"),
                ),
        )
}
