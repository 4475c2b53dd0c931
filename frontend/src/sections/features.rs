//! "Features" card: the four capability tiles.

use crate::sections::{section_container, service_card};
use crate::tokens::*;
use crate::typography;
use shared::Section;
use zoon::*;

pub fn view() -> impl Element {
    section_container(
        Section::Features,
        Column::new()
            .s(Gap::new().y(SPACING_20))
            .item(typography::section_heading("Features and ", "Capabilities"))
            .item(typography::paragraph(
                "We provide powerful AI-driven language analysis capabilities to \
                 support your clinical, research, or educational needs.",
            ))
            .item(
                Row::new()
                    .s(Gap::new().x(SPACING_20).y(SPACING_20))
                    .multiline()
                    .item(card(
                        "🌐",
                        "Multilingual Analysis",
                        "Analyze text and audio in multiple languages, including \
                         English, Spanish, French, German, and more.",
                    ))
                    .item(card(
                        "📄",
                        "Comprehensive Text Analysis",
                        "Gain insights from grammar checks and readability scores to \
                         detailed linguistic feature extraction.",
                    ))
                    .item(card(
                        "🎙",
                        "Audio Transcription & Analysis",
                        "Automatically transcribe audio files and analyze speech \
                         patterns for clinical or research purposes.",
                    ))
                    .item(card(
                        "🧠",
                        "AI-Powered Assistance",
                        "Utilize our AI Companion for text generation, summarization, \
                         and grammar refinement.",
                    )),
            ),
    )
}

fn card(icon: &'static str, title: &'static str, body: &'static str) -> impl Element {
    service_card(icon, typography::h3(title), typography::paragraph(body))
}
