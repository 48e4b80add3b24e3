//! Error types for wizard construction and form submission

use skillswap_types::SectionId;
use thiserror::Error;

/// Wizard errors
///
/// Navigation itself never fails; these cover broken declarations and the
/// form collaborator.
#[derive(Debug, Error)]
pub enum WizardError {
    /// Two sections declared with the same id
    #[error("Section {0} is declared more than once")]
    DuplicateSection(SectionId),

    /// Two progress markers declared with the same id
    #[error("Progress indicator {0} is declared more than once")]
    DuplicateIndicator(SectionId),

    /// Progress marker for a section that does not exist
    #[error("Progress indicator {0} has no matching section")]
    OrphanIndicator(SectionId),

    /// Progress marker state disagrees with its section
    #[error("Progress indicator {0} active state does not match its section")]
    IndicatorMismatch(SectionId),

    /// Two controls share a name
    #[error("Control '{0}' is declared more than once")]
    DuplicateControl(String),

    /// More than one section starts out visible
    #[error("Sections {first} and {second} are both declared initially visible")]
    MultipleInitial {
        /// First visible section found
        first: SectionId,
        /// Second visible section found
        second: SectionId,
    },

    /// Form collaborator rejected a submission
    #[error("Form submission failed: {0}")]
    Submit(String),

    /// Layout file is not valid TOML or does not match the layout shape
    #[error("Layout parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, WizardError>;
