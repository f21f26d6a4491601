//! Active-section resolution for the nav highlight.
//!
//! The probe point sits one third of the viewport below the scroll
//! position; the active section is the last one whose `[top, top+height)`
//! range contains it. DOM class shuffling stays on the JS side.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

pub fn active_section<'a>(
    sections: &'a [Section],
    scroll_y: f64,
    viewport_height: f64,
) -> Option<&'a str> {
    let probe = scroll_y + viewport_height / 3.0;
    let mut current = None;
    for section in sections {
        if probe >= section.top && probe < section.top + section.height {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// JSON-facing wrapper for the page script: takes `[{id, top, height}, ...]`
/// and returns the active section id, or nothing when the probe falls
/// outside every section (or the JSON is malformed - non-fatal per the
/// page's best-effort contract).
#[wasm_bindgen]
pub fn active_section_id(sections_json: &str, scroll_y: f64, viewport_height: f64) -> Option<String> {
    let sections: Vec<Section> = serde_json::from_str(sections_json).ok()?;
    active_section(&sections, scroll_y, viewport_height).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<Section> {
        vec![
            Section { id: "hero".into(), top: 0.0, height: 800.0 },
            Section { id: "about".into(), top: 800.0, height: 600.0 },
            Section { id: "contact".into(), top: 1400.0, height: 400.0 },
        ]
    }

    #[test]
    fn probe_sits_a_third_below_the_scroll_position() {
        let sections = page();
        // scroll_y 600 + 900/3 = 900 -> inside "about"
        assert_eq!(active_section(&sections, 600.0, 900.0), Some("about"));
        assert_eq!(active_section(&sections, 0.0, 900.0), Some("hero"));
    }

    #[test]
    fn past_the_last_section_nothing_is_active() {
        let sections = page();
        assert_eq!(active_section(&sections, 2000.0, 900.0), None);
    }

    #[test]
    fn overlapping_sections_prefer_the_later_one() {
        let sections = vec![
            Section { id: "a".into(), top: 0.0, height: 1000.0 },
            Section { id: "b".into(), top: 500.0, height: 1000.0 },
        ];
        assert_eq!(active_section(&sections, 500.0, 300.0), Some("b"));
    }

    #[test]
    fn empty_list_is_never_active() {
        assert_eq!(active_section(&[], 100.0, 900.0), None);
    }
}
