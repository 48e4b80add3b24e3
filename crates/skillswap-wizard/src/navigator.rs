//! Step navigation over a static, ordered set of form sections
//!
//! The navigator owns the `visible`/`active` flags of every section and
//! progress marker. A transition is always a full deactivation sweep
//! followed by at most one activation; nothing depends on which section was
//! visible before.

use crate::error::{Result, WizardError};
use serde::{Deserialize, Serialize};
use skillswap_types::{Control, NavigationEvent, ProgressIndicator, Section, SectionId};
use std::collections::HashMap;
use tracing::{debug, warn};

/// What to do when a transition names a section that was never declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownTargetPolicy {
    /// Hide everything and show nothing
    #[default]
    Clear,
    /// Refuse the transition and leave the current section visible
    KeepCurrent,
}

/// Result of a single transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The target section is now the only visible one
    Shown(SectionId),
    /// Target unknown; every section and marker is now hidden
    Cleared(u32),
    /// Target unknown; state left untouched
    Refused(u32),
}

impl Transition {
    /// The section that is visible after this transition, if known
    pub fn shown(self) -> Option<SectionId> {
        match self {
            Transition::Shown(id) => Some(id),
            Transition::Cleared(_) | Transition::Refused(_) => None,
        }
    }
}

/// Serializable view of the presentation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibilityState {
    pub visible_sections: Vec<SectionId>,
    pub active_indicators: Vec<SectionId>,
}

/// Keeps exactly one form section visible and moves between sections on
/// control activation
#[derive(Debug, Clone)]
pub struct StepNavigator {
    sections: Vec<Section>,
    indicators: Vec<ProgressIndicator>,
    controls: Vec<Control>,
    section_index: HashMap<SectionId, usize>,
    indicator_index: HashMap<SectionId, usize>,
    control_index: HashMap<String, usize>,
    policy: UnknownTargetPolicy,
}

impl StepNavigator {
    /// Wire sections, markers and controls together
    ///
    /// Visibility is taken as declared. Control targets are not checked
    /// against the section set.
    pub fn new(
        sections: Vec<Section>,
        indicators: Vec<ProgressIndicator>,
        controls: Vec<Control>,
    ) -> Result<Self> {
        let mut section_index = HashMap::with_capacity(sections.len());
        let mut initial: Option<SectionId> = None;
        for (i, section) in sections.iter().enumerate() {
            if section_index.insert(section.id, i).is_some() {
                return Err(WizardError::DuplicateSection(section.id));
            }
            if section.visible {
                if let Some(first) = initial {
                    return Err(WizardError::MultipleInitial {
                        first,
                        second: section.id,
                    });
                }
                initial = Some(section.id);
            }
        }

        let mut indicator_index = HashMap::with_capacity(indicators.len());
        for (i, indicator) in indicators.iter().enumerate() {
            if !section_index.contains_key(&indicator.id) {
                return Err(WizardError::OrphanIndicator(indicator.id));
            }
            if indicator_index.insert(indicator.id, i).is_some() {
                return Err(WizardError::DuplicateIndicator(indicator.id));
            }
            if indicator.active != (initial == Some(indicator.id)) {
                return Err(WizardError::IndicatorMismatch(indicator.id));
            }
        }

        let mut control_index = HashMap::with_capacity(controls.len());
        for (i, control) in controls.iter().enumerate() {
            if control_index.insert(control.name.clone(), i).is_some() {
                return Err(WizardError::DuplicateControl(control.name.clone()));
            }
            if resolve(&section_index, control.target).is_none() {
                debug!(
                    "Control '{}' targets undeclared section {}",
                    control.name, control.target
                );
            }
        }

        Ok(Self {
            sections,
            indicators,
            controls,
            section_index,
            indicator_index,
            control_index,
            policy: UnknownTargetPolicy::default(),
        })
    }

    /// Set the unknown-target policy
    #[must_use]
    pub fn with_policy(mut self, policy: UnknownTargetPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> UnknownTargetPolicy {
        self.policy
    }

    /// Make `target` the only visible section
    ///
    /// Never fails. With [`UnknownTargetPolicy::Clear`] an undeclared target
    /// leaves nothing visible.
    pub fn show_step(&mut self, target: u32) -> Transition {
        let slot = resolve(&self.section_index, target);

        if slot.is_none() && self.policy == UnknownTargetPolicy::KeepCurrent {
            warn!("Refusing transition to undeclared section {}", target);
            return Transition::Refused(target);
        }

        for section in &mut self.sections {
            section.visible = false;
        }
        for indicator in &mut self.indicators {
            indicator.active = false;
        }

        let Some((id, slot)) = slot else {
            warn!("No section {} declared, all sections hidden", target);
            return Transition::Cleared(target);
        };

        self.sections[slot].visible = true;
        if let Some(&marker) = self.indicator_index.get(&id) {
            self.indicators[marker].active = true;
        }

        debug!("Showing section {}", id);
        Transition::Shown(id)
    }

    /// Apply a navigation event
    pub fn handle(&mut self, event: NavigationEvent) -> Transition {
        debug!("Handling {} to section {}", event.direction, event.target);
        self.show_step(event.target)
    }

    /// Activate a control by name
    ///
    /// Returns `None` when no control has that name.
    pub fn activate(&mut self, control: &str) -> Option<Transition> {
        let event = self.binding(control)?;
        Some(self.handle(event))
    }

    /// The event a control is bound to
    pub fn binding(&self, control: &str) -> Option<NavigationEvent> {
        self.control_index
            .get(control)
            .map(|&i| self.controls[i].event())
    }

    /// Currently visible section
    pub fn current(&self) -> Option<SectionId> {
        self.sections.iter().find(|s| s.visible).map(|s| s.id)
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.section_index.get(&id).map(|&i| &self.sections[i])
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn indicators(&self) -> &[ProgressIndicator] {
        &self.indicators
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn snapshot(&self) -> VisibilityState {
        VisibilityState {
            visible_sections: self
                .sections
                .iter()
                .filter(|s| s.visible)
                .map(|s| s.id)
                .collect(),
            active_indicators: self
                .indicators
                .iter()
                .filter(|i| i.active)
                .map(|i| i.id)
                .collect(),
        }
    }
}

/// Look up a raw target; zero and undeclared ids both miss
fn resolve(index: &HashMap<SectionId, usize>, target: u32) -> Option<(SectionId, usize)> {
    let id = SectionId::new(target)?;
    index.get(&id).map(|&slot| (id, slot))
}
