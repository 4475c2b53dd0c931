use serde::{Serialize, Deserialize};

// ===== THEME =====

/// localStorage key holding the persisted theme. Single key, no versioning.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted wire value, shared with the original site's localStorage entry.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a persisted value. Anything but the two literal strings is
    /// treated as an absent (corrupted) entry.
    pub fn from_str_opt(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Startup theme precedence: valid persisted value, then the host's
/// dark-scheme signal, then `Light`.
pub fn resolve_theme(persisted: Option<&str>, system_prefers_dark: bool) -> Theme {
    persisted
        .and_then(Theme::from_str_opt)
        .unwrap_or(if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
}

// ===== SECTION REGISTRY =====

/// Navigable page sections, in document order. The registry is fixed at
/// compile time and never mutated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Features,
    Cases,
    Downloads,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Features,
        Section::Cases,
        Section::Downloads,
    ];

    /// DOM anchor id and nav-link target.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Features => "features",
            Section::Cases => "cases",
            Section::Downloads => "downloads",
        }
    }

    /// Display text for nav links.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Features => "Features",
            Section::Cases => "Cases",
            Section::Downloads => "Downloads",
        }
    }

    /// Registry membership test and lookup in one step.
    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.id() == id)
    }
}

// ===== ACTIVE-SECTION SCAN =====

/// The probe line sits this far below the viewport top; a section becomes
/// active once its interval reaches the probe.
pub const SCROLL_PROBE_OFFSET: f64 = 300.0;

/// Per-sample snapshot of one section's vertical extent in document
/// coordinates (offsetTop/offsetHeight of the section element).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(section: Section, top: f64, height: f64) -> Self {
        Self { section, top, height }
    }
}

/// Scans `bounds` in registry order and returns the last section whose
/// `[top, top + height)` interval contains `scroll_y + SCROLL_PROBE_OFFSET`.
/// Lower bound inclusive, upper exclusive, so adjacent sections hand over
/// deterministically. `None` when the probe sits outside every interval;
/// the caller keeps the previous active section in that case.
pub fn section_at(scroll_y: f64, bounds: &[SectionBounds]) -> Option<Section> {
    let probe = scroll_y + SCROLL_PROBE_OFFSET;
    let mut hit = None;
    for entry in bounds {
        if probe >= entry.top && probe < entry.top + entry.height {
            hit = Some(entry.section);
        }
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contiguous_bounds() -> Vec<SectionBounds> {
        // Five adjacent sections, no gap, no overlap.
        Section::ALL
            .into_iter()
            .enumerate()
            .map(|(index, section)| SectionBounds::new(section, index as f64 * 800.0, 800.0))
            .collect()
    }

    #[test]
    fn probe_selects_containing_section() {
        let bounds = contiguous_bounds();
        assert_eq!(section_at(0.0, &bounds), Some(Section::Home));
        assert_eq!(section_at(900.0, &bounds), Some(Section::About));
        assert_eq!(section_at(3400.0, &bounds), Some(Section::Downloads));
    }

    #[test]
    fn adjacent_sections_hand_over_at_lower_bound() {
        let bounds = contiguous_bounds();
        // Probe exactly on the boundary belongs to the lower-bound-inclusive
        // section, not the one ending there.
        assert_eq!(section_at(500.0, &bounds), Some(Section::About));
        assert_eq!(section_at(499.0, &bounds), Some(Section::Home));
    }

    #[test]
    fn probe_outside_every_interval_matches_nothing() {
        let bounds = contiguous_bounds();
        assert_eq!(section_at(4000.0, &bounds), None);
        assert_eq!(section_at(-400.0, &bounds), None);
        assert_eq!(section_at(0.0, &[]), None);
    }

    #[test]
    fn overlapping_intervals_resolve_to_last_match() {
        let bounds = [
            SectionBounds::new(Section::Home, 0.0, 1000.0),
            SectionBounds::new(Section::About, 200.0, 1000.0),
        ];
        assert_eq!(section_at(0.0, &bounds), Some(Section::About));
    }

    #[test]
    fn theme_resolution_precedence() {
        assert_eq!(resolve_theme(Some("dark"), false), Theme::Dark);
        assert_eq!(resolve_theme(Some("light"), true), Theme::Light);
        assert_eq!(resolve_theme(None, true), Theme::Dark);
        assert_eq!(resolve_theme(None, false), Theme::Light);
    }

    #[test]
    fn corrupted_persisted_theme_falls_through() {
        assert_eq!(resolve_theme(Some("solarized"), true), Theme::Dark);
        assert_eq!(resolve_theme(Some(""), false), Theme::Light);
    }

    #[test]
    fn theme_toggle_returns_after_double_application() {
        let original = Theme::Light;
        assert_eq!(original.toggled().toggled(), original);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn theme_serde_representation_matches_storage_values() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"dark\"").unwrap(),
            Theme::Dark
        );
    }

    #[test]
    fn section_ids_round_trip_through_registry_lookup() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("support"), None);
        assert_eq!(Section::from_id(""), None);
    }
}
