//! Site footer: blurb, navigation, feature links, social links.

use crate::state::ViewState;
use crate::tokens::*;
use crate::typography;
use shared::Section;
use zoon::*;

pub fn footer(view_state: ViewState) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Background::new().color_signal(neutral_3()))
        .s(Padding::new().x(SPACING_24).y(SPACING_48))
        .s(Gap::new().y(SPACING_32))
        .item(
            Row::new()
                .s(Width::fill().max(CONTENT_MAX_WIDTH))
                .s(Align::new().center_x())
                .s(Gap::new().x(SPACING_48).y(SPACING_32))
                .multiline()
                .item(blurb_column())
                .item(navigation_column(view_state.clone()))
                .item(features_column(view_state))
                .item(connect_column()),
        )
        .item(
            El::new()
                .s(Align::new().center_x())
                .child(typography::small("© 2025 Open Brain AI. All rights reserved.")),
        )
}

fn blurb_column() -> impl Element {
    Column::new()
        .s(Width::fill().min(260).max(360))
        .s(Gap::new().y(SPACING_12))
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_20)
                    .weight(FontWeight::Bold)
                    .color_signal(primary_7()))
                .child("Open Brain AI"),
        )
        .item(typography::paragraph(
            "Committed to supporting clinicians and educators with computational \
             AI models and to helping patients and students who struggle with \
             speech.",
        ))
}

fn navigation_column(view_state: ViewState) -> impl Element {
    link_column(
        "Navigation",
        Section::ALL.into_iter().map(move |section| {
            footer_link(section.label(), {
                let view_state = view_state.clone();
                move || view_state.navigate_to(section)
            })
        }),
    )
}

fn features_column(view_state: ViewState) -> impl Element {
    let features = [
        "Multilingual Analysis",
        "Comprehensive Text Analysis",
        "Audio Transcription & Analysis",
        "AI-Powered Assistance",
    ];
    link_column(
        "Features",
        features.into_iter().map(move |label| {
            footer_link(label, {
                let view_state = view_state.clone();
                move || view_state.navigate_to(Section::Features)
            })
        }),
    )
}

fn connect_column() -> impl Element {
    Column::new()
        .s(Gap::new().y(SPACING_12))
        .item(typography::h3("Connect"))
        .item(
            Row::new()
                .s(Gap::new().x(SPACING_12))
                .item(social_link("𝕏", "https://twitter.com/openbrainai"))
                .item(social_link("Reddit", "https://www.reddit.com/r/openbrainai/")),
        )
}

fn link_column(
    title: &'static str,
    links: impl Iterator<Item = impl Element>,
) -> impl Element {
    Column::new()
        .s(Gap::new().y(SPACING_12))
        .item(typography::h3(title))
        .item(Column::new().s(Gap::new().y(SPACING_4)).items(links))
}

fn footer_link(label: &'static str, on_press: impl Fn() + 'static) -> impl Element {
    Button::new()
        .s(Font::new().size(FONT_SIZE_16).color_signal(neutral_11()))
        .s(transition_colors())
        .label(label)
        .on_press(on_press)
}

fn social_link(label: &'static str, url: &'static str) -> impl Element {
    Link::new()
        .s(Font::new()
            .size(FONT_SIZE_16)
            .weight(FontWeight::Medium)
            .color_signal(primary_7()))
        .label(label)
        .to(url)
        .new_tab(NewTab::new())
}
