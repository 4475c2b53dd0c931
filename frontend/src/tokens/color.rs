// Color token system.
// Reactive signals resolving per theme; oklch with an indigo primary hue.

use crate::theme::theme;
use shared::Theme;
use zoon::*;

// Primary scale (indigo)

pub fn primary_2() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(95% 0.03 275)",
        Theme::Dark => "oklch(25% 0.03 275)",
    })
}

pub fn primary_3() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(90% 0.05 275)",
        Theme::Dark => "oklch(30% 0.05 275)",
    })
}

pub fn primary_5() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(75% 0.10 275)",
        Theme::Dark => "oklch(45% 0.10 275)",
    })
}

pub fn primary_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(55% 0.17 275)",
        Theme::Dark => "oklch(65% 0.17 275)",
    })
}

pub fn primary_9() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(35% 0.15 275)",
        Theme::Dark => "oklch(85% 0.15 275)",
    })
}

// Neutral scale

pub fn neutral_1() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(99% 0.01 275)",
        Theme::Dark => "oklch(14% 0.01 275)",
    })
}

pub fn neutral_2() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(97% 0.01 275)",
        Theme::Dark => "oklch(18% 0.01 275)",
    })
}

pub fn neutral_3() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(93% 0.02 275)",
        Theme::Dark => "oklch(24% 0.02 275)",
    })
}

pub fn neutral_4() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(88% 0.02 275)",
        Theme::Dark => "oklch(30% 0.02 275)",
    })
}

pub fn neutral_6() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(70% 0.03 275)",
        Theme::Dark => "oklch(48% 0.03 275)",
    })
}

pub fn neutral_8() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(50% 0.03 275)",
        Theme::Dark => "oklch(68% 0.03 275)",
    })
}

pub fn neutral_11() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(35% 0.02 275)",
        Theme::Dark => "oklch(85% 0.02 275)",
    })
}

pub fn neutral_12() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(20% 0.02 275)",
        Theme::Dark => "oklch(95% 0.02 275)",
    })
}

// Fixed accents (same in both themes)

pub fn accent_on_primary() -> impl Signal<Item = &'static str> {
    theme().map(|_| "oklch(99% 0.01 275)")
}
