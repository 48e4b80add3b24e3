//! The form that receives the final multi-step payload

use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// Payload posted when the wizard form is submitted
///
/// Holds every declared field, whichever section it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSubmission {
    /// Where the form posts to
    pub action: String,
    /// Control that triggered the submission
    pub submitter: String,
    pub fields: BTreeMap<String, String>,
}

impl FormSubmission {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Receiver of form submissions
pub trait FormCollaborator {
    /// Accept one submission
    fn submit(&mut self, submission: FormSubmission) -> Result<()>;
}

/// Keeps every submission in memory
#[derive(Debug, Default)]
pub struct RecordingForm {
    submissions: Vec<FormSubmission>,
}

impl RecordingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> &[FormSubmission] {
        &self.submissions
    }

    pub fn last(&self) -> Option<&FormSubmission> {
        self.submissions.last()
    }
}

impl FormCollaborator for RecordingForm {
    fn submit(&mut self, submission: FormSubmission) -> Result<()> {
        self.submissions.push(submission);
        Ok(())
    }
}
