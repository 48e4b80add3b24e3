//! Page host: delivers user activations to the navigator and the form
//!
//! Every control sits inside the form, so its default action is to submit
//! it. Navigation controls have a handler that prevents that default before
//! switching sections; submit controls have no handler.

use crate::error::Result;
use crate::form::{FormCollaborator, FormSubmission};
use crate::navigator::{StepNavigator, Transition};
use skillswap_types::ActivationSource;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, info_span, warn, Span};
use uuid::Uuid;

/// A single user activation of a control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    control: String,
    source: ActivationSource,
    default_prevented: bool,
}

impl Activation {
    pub fn new(control: impl Into<String>, source: ActivationSource) -> Self {
        Self {
            control: control.into(),
            source,
            default_prevented: false,
        }
    }

    pub fn control(&self) -> &str {
        &self.control
    }

    pub fn source(&self) -> ActivationSource {
        self.source
    }

    /// Stop the control's default action from running
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What a dispatched activation ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A navigation handler ran
    Navigated(Transition),
    /// The form was submitted
    Submitted,
    /// No control with that name exists
    Ignored,
}

/// A loaded page holding one wizard and its form
pub struct Page<F> {
    id: Uuid,
    span: Span,
    action: String,
    navigator: StepNavigator,
    submit_controls: HashSet<String>,
    values: BTreeMap<String, String>,
    form: F,
}

impl<F: FormCollaborator> Page<F> {
    /// Load a page around an already wired navigator
    pub fn new(
        navigator: StepNavigator,
        submit_controls: impl IntoIterator<Item = String>,
        action: impl Into<String>,
        form: F,
    ) -> Self {
        let id = Uuid::new_v4();
        let span = info_span!("page", id = %id);

        // Every declared field is posted, set or not.
        let values = navigator
            .sections()
            .iter()
            .flat_map(|s| s.fields.iter())
            .map(|name| (name.clone(), String::new()))
            .collect();

        let page = Self {
            id,
            span,
            action: action.into(),
            navigator,
            submit_controls: submit_controls.into_iter().collect(),
            values,
            form,
        };

        page.span.in_scope(|| {
            info!(
                "Page loaded with {} sections, {} controls",
                page.navigator.sections().len(),
                page.navigator.controls().len() + page.submit_controls.len()
            );
        });

        page
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn navigator(&self) -> &StepNavigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut StepNavigator {
        &mut self.navigator
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Record a field value
    ///
    /// Returns `false` if no section declares the field; the value is
    /// dropped in that case.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Deliver one activation
    pub fn dispatch(&mut self, control: &str, source: ActivationSource) -> Result<Outcome> {
        let _guard = self.span.enter();
        let mut activation = Activation::new(control, source);

        // Navigation handlers always suppress the default action
        if let Some(event) = self.navigator.binding(activation.control()) {
            activation.prevent_default();
            debug!("{:?} activation of '{}'", activation.source(), control);
            return Ok(Outcome::Navigated(self.navigator.handle(event)));
        }

        if !self.submit_controls.contains(activation.control()) {
            warn!("Ignoring activation of unknown control '{}'", control);
            return Ok(Outcome::Ignored);
        }

        let submission = FormSubmission {
            action: self.action.clone(),
            submitter: control.to_string(),
            fields: self.values.clone(),
        };
        self.form.submit(submission)?;
        info!("Form submitted to {} via '{}'", self.action, control);
        Ok(Outcome::Submitted)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::form::RecordingForm;
    use skillswap_types::{Control, Section, SectionId};

    fn id(n: u32) -> SectionId {
        SectionId::new(n).unwrap()
    }

    fn page() -> Page<RecordingForm> {
        let sections = vec![
            Section::new(id(1), "Name").with_fields(["full_name"]).shown(),
            Section::new(id(2), "Bio").with_fields(["bio"]),
        ];
        let controls = vec![Control::next("next", id(1), 2)];
        let navigator = StepNavigator::new(sections, Vec::new(), controls).unwrap();
        Page::new(navigator, ["finish".to_string()], "/profile/create/", RecordingForm::new())
    }

    #[test]
    fn test_activation_prevent_default() {
        let mut activation = Activation::new("next", ActivationSource::Keyboard);
        assert!(!activation.default_prevented());
        activation.prevent_default();
        assert!(activation.default_prevented());
        assert_eq!(activation.source(), ActivationSource::Keyboard);
    }

    #[test]
    fn test_navigation_does_not_submit() {
        let mut page = page();
        let outcome = page.dispatch("next", ActivationSource::Pointer).unwrap();
        assert_eq!(outcome, Outcome::Navigated(Transition::Shown(id(2))));
        assert!(page.form().submissions().is_empty());
    }

    #[test]
    fn test_submit_control_posts_all_fields() {
        let mut page = page();
        assert!(page.set_field("full_name", "Ada Lovelace"));
        assert!(!page.set_field("nickname", "ada"));

        let outcome = page.dispatch("finish", ActivationSource::Pointer).unwrap();
        assert_eq!(outcome, Outcome::Submitted);

        let submission = page.form().last().unwrap();
        assert_eq!(submission.action, "/profile/create/");
        assert_eq!(submission.submitter, "finish");
        assert_eq!(submission.field("full_name"), Some("Ada Lovelace"));
        assert_eq!(submission.field("bio"), Some(""));
        assert_eq!(submission.field("nickname"), None);
    }

    #[test]
    fn test_navigation_binding_wins_over_submit() {
        let sections = vec![Section::new(id(1), "Only").shown()];
        let controls = vec![Control::prev("back", id(1), 1)];
        let navigator = StepNavigator::new(sections, Vec::new(), controls).unwrap();
        let mut page = Page::new(navigator, ["back".to_string()], "/", RecordingForm::new());

        let outcome = page.dispatch("back", ActivationSource::Keyboard).unwrap();
        assert_eq!(outcome, Outcome::Navigated(Transition::Shown(id(1))));
        assert!(page.form().submissions().is_empty());
    }

    #[test]
    fn test_unknown_control_ignored() {
        let mut page = page();
        let outcome = page.dispatch("nope", ActivationSource::Pointer).unwrap();
        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(page.navigator().current(), Some(id(1)));
        assert!(page.form().submissions().is_empty());
    }
}
