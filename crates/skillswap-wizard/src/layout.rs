//! Declarative wizard layout
//!
//! A layout is the explicit form of what the page template declares:
//! sections, their progress markers, and the controls wired to them.
//!
//! ```toml
//! action = "/profile/create/"
//! submit = ["create-profile"]
//!
//! [[sections]]
//! id = 1
//! title = "Personal details"
//! fields = ["full_name", "location"]
//! initial = true
//!
//! [[indicators]]
//! id = 1
//! label = "Details"
//!
//! [[controls]]
//! name = "step1-next"
//! direction = "next"
//! source = 1
//! target = 2
//! ```

use crate::error::Result;
use crate::form::FormCollaborator;
use crate::navigator::{StepNavigator, UnknownTargetPolicy};
use crate::page::Page;
use serde::{Deserialize, Serialize};
use skillswap_types::{Control, ProgressIndicator, Section, SectionId};
use std::num::NonZeroU32;
use std::path::Path;
use tracing::debug;

const DETAILS: SectionId = SectionId::from_nonzero(NonZeroU32::MIN);
const ABOUT: SectionId = SectionId::from_nonzero(NonZeroU32::MIN.saturating_add(1));
const CERTIFICATIONS: SectionId = SectionId::from_nonzero(NonZeroU32::MIN.saturating_add(2));

fn default_action() -> String {
    "/".to_string()
}

/// A section as declared in a layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDecl {
    pub id: SectionId,
    pub title: String,
    #[serde(default)]
    pub fields: Vec<String>,
    /// Visible when the page loads
    #[serde(default)]
    pub initial: bool,
}

/// A progress marker as declared in a layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorDecl {
    pub id: SectionId,
    pub label: String,
}

/// Complete wizard declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardLayout {
    /// Endpoint the form posts to
    #[serde(default = "default_action")]
    pub action: String,
    pub sections: Vec<SectionDecl>,
    #[serde(default)]
    pub indicators: Vec<IndicatorDecl>,
    #[serde(default)]
    pub controls: Vec<Control>,
    /// Controls without a navigation handler, which submit the form
    #[serde(default)]
    pub submit: Vec<String>,
}

impl WizardLayout {
    /// Parse a layout from TOML
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a layout file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!("Loaded layout from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Layout of the profile creation form
    pub fn profile() -> Self {
        let fields = |names: &[&str]| -> Vec<String> {
            names.iter().map(|n| (*n).to_string()).collect()
        };

        Self {
            action: "/profile/create/".to_string(),
            sections: vec![
                SectionDecl {
                    id: DETAILS,
                    title: "Personal details".to_string(),
                    fields: fields(&["full_name", "location"]),
                    initial: true,
                },
                SectionDecl {
                    id: ABOUT,
                    title: "About you".to_string(),
                    fields: fields(&["bio"]),
                    initial: false,
                },
                SectionDecl {
                    id: CERTIFICATIONS,
                    title: "Certifications".to_string(),
                    fields: fields(&["certifications"]),
                    initial: false,
                },
            ],
            indicators: vec![
                IndicatorDecl {
                    id: DETAILS,
                    label: "Details".to_string(),
                },
                IndicatorDecl {
                    id: ABOUT,
                    label: "About".to_string(),
                },
                IndicatorDecl {
                    id: CERTIFICATIONS,
                    label: "Certifications".to_string(),
                },
            ],
            controls: vec![
                Control::next("step1-next", DETAILS, ABOUT.get()),
                Control::prev("step2-prev", ABOUT, DETAILS.get()),
                Control::next("step2-next", ABOUT, CERTIFICATIONS.get()),
                Control::prev("step3-prev", CERTIFICATIONS, ABOUT.get()),
            ],
            submit: vec!["create-profile".to_string()],
        }
    }

    /// Build the navigator this layout describes
    ///
    /// Markers start active for the initially visible section.
    pub fn to_navigator(&self, policy: UnknownTargetPolicy) -> Result<StepNavigator> {
        let sections = self
            .sections
            .iter()
            .map(|decl| {
                let section =
                    Section::new(decl.id, decl.title.clone()).with_fields(decl.fields.clone());
                if decl.initial {
                    section.shown()
                } else {
                    section
                }
            })
            .collect();

        let indicators = self
            .indicators
            .iter()
            .map(|decl| {
                let mut indicator = ProgressIndicator::new(decl.id, decl.label.clone());
                indicator.active = self.sections.iter().any(|s| s.initial && s.id == decl.id);
                indicator
            })
            .collect();

        Ok(StepNavigator::new(sections, indicators, self.controls.clone())?.with_policy(policy))
    }

    /// Load a page for this layout
    pub fn into_page<F: FormCollaborator>(
        self,
        policy: UnknownTargetPolicy,
        form: F,
    ) -> Result<Page<F>> {
        let navigator = self.to_navigator(policy)?;
        Ok(Page::new(navigator, self.submit, self.action, form))
    }
}
