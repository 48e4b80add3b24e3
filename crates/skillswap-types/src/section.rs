use crate::SectionId;
use serde::{Deserialize, Serialize};

/// CSS class carried by every form section
pub const SECTION_CLASS: &str = "form-step";

/// CSS class carried by every progress marker
pub const INDICATOR_CLASS: &str = "progress-step";

/// CSS class toggled on the visible section and its marker
pub const ACTIVE_CLASS: &str = "active";

/// One page of the multi-step form, shown or hidden as a unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    /// Names of the form fields rendered inside this section
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub visible: bool,
}

impl Section {
    pub fn new(id: SectionId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            fields: Vec::new(),
            visible: false,
        }
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn shown(mut self) -> Self {
        self.visible = true;
        self
    }

    /// Class list as the rendering layer sees it
    pub fn class_list(&self) -> String {
        class_list(SECTION_CLASS, self.visible)
    }
}

/// Progress marker paired 1:1 with a section id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressIndicator {
    pub id: SectionId,
    pub label: String,
    #[serde(default)]
    pub active: bool,
}

impl ProgressIndicator {
    pub fn new(id: SectionId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            active: false,
        }
    }

    pub fn class_list(&self) -> String {
        class_list(INDICATOR_CLASS, self.active)
    }
}

fn class_list(base: &str, active: bool) -> String {
    if active {
        format!("{} {}", base, ACTIVE_CLASS)
    } else {
        base.to_string()
    }
}
