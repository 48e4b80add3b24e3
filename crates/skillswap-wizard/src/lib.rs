//! `SkillSwap` Profile Wizard
//!
//! Multi-step form navigation for the `SkillSwap` profile pages.
//!
//! ## Features
//!
//! - Exactly one form section visible at a time, with paired progress markers
//! - Controls bound to fixed target sections at load time
//! - Declarative layouts (TOML) instead of template scanning
//! - Navigation controls never submit the form; submit controls do
//! - Configurable handling of controls that point at undeclared sections

#![deny(unsafe_code, dead_code, unused_imports, unused_variables)]

pub mod error;
pub mod form;
pub mod layout;
pub mod navigator;
pub mod page;

pub use error::WizardError;
pub use form::{FormCollaborator, FormSubmission, RecordingForm};
pub use layout::WizardLayout;
pub use navigator::{StepNavigator, Transition, UnknownTargetPolicy, VisibilityState};
pub use page::{Activation, Outcome, Page};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Page, StepNavigator, UnknownTargetPolicy, WizardError, WizardLayout};
}
