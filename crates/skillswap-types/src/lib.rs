//! SkillSwap Types - Core types for the SkillSwap profile wizard
//!
//! This module defines the data model shared by the wizard engine and the
//! console driver: form sections, their progress markers, and the
//! navigation controls that move between them.

pub mod events;
pub mod section;

pub use events::{ActivationSource, Control, Direction, NavigationEvent};
pub use section::{ProgressIndicator, Section};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a form section (1-based)
///
/// Zero is unrepresentable. Only declared sections carry one; navigation
/// targets are raw numbers resolved by the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SectionId(NonZeroU32);

impl SectionId {
    /// Create a section id, returning `None` for zero
    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self)
    }

    pub const fn from_nonzero(id: NonZeroU32) -> Self {
        Self(id)
    }

    /// The raw 1-based value
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SectionId> for u32 {
    fn from(id: SectionId) -> Self {
        id.get()
    }
}

impl TryFrom<u32> for SectionId {
    type Error = ParseSectionIdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ParseSectionIdError::Zero)
    }
}

impl FromStr for SectionId {
    type Err = ParseSectionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| ParseSectionIdError::NotANumber(s.to_string()))?;
        Self::try_from(value)
    }
}

/// Errors produced when reading a section id from declarations or input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSectionIdError {
    /// Section ids start at 1
    #[error("section ids start at 1")]
    Zero,

    /// Input was not an unsigned integer
    #[error("'{0}' is not a section id")]
    NotANumber(String),
}
