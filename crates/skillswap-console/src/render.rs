//! Presentation of the wizard state on stdout

use serde::Serialize;
use skillswap_types::SectionId;
use skillswap_wizard::StepNavigator;

#[derive(Debug, Serialize)]
struct RenderedSection<'a> {
    id: SectionId,
    title: &'a str,
    class: String,
    indicator: Option<String>,
}

#[derive(Debug, Serialize)]
struct RenderedState<'a> {
    current: Option<SectionId>,
    sections: Vec<RenderedSection<'a>>,
}

fn rendered(navigator: &StepNavigator) -> RenderedState<'_> {
    let sections = navigator
        .sections()
        .iter()
        .map(|section| RenderedSection {
            id: section.id,
            title: &section.title,
            class: section.class_list(),
            indicator: navigator
                .indicators()
                .iter()
                .find(|i| i.id == section.id)
                .map(|i| i.class_list()),
        })
        .collect();

    RenderedState {
        current: navigator.current(),
        sections,
    }
}

/// Render the state as plain text, one section per line
pub fn text(navigator: &StepNavigator) -> String {
    let state = rendered(navigator);
    let mut out = String::new();

    for section in &state.sections {
        let marker = if state.current == Some(section.id) {
            '>'
        } else {
            ' '
        };
        out.push_str(&format!(
            "{} [{}] {:<20} {:<18} {}\n",
            marker,
            section.id,
            section.title,
            section.class,
            section.indicator.as_deref().unwrap_or("-"),
        ));
    }

    if state.current.is_none() {
        out.push_str("  (no section visible)\n");
    }

    out
}

/// Render the state as a single JSON line
pub fn json(navigator: &StepNavigator) -> serde_json::Result<String> {
    serde_json::to_string(&rendered(navigator))
}
