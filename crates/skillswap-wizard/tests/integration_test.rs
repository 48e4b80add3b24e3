//! End-to-end wizard scenarios driven through the page host
#![allow(clippy::unwrap_used, clippy::expect_used)]

use skillswap_types::{ActivationSource, Control, ProgressIndicator, Section, SectionId};
use skillswap_wizard::{
    Outcome, Page, RecordingForm, StepNavigator, Transition, UnknownTargetPolicy, WizardLayout,
};

fn id(n: u32) -> SectionId {
    SectionId::new(n).unwrap()
}

fn three_step_page() -> Page<RecordingForm> {
    let sections = vec![
        Section::new(id(1), "Details").with_fields(["full_name", "location"]).shown(),
        Section::new(id(2), "About").with_fields(["bio"]),
        Section::new(id(3), "Certifications").with_fields(["certifications"]),
    ];
    let mut indicators: Vec<_> = (1..=3)
        .map(|n| ProgressIndicator::new(id(n), format!("Step {n}")))
        .collect();
    indicators[0].active = true;
    let controls = vec![
        Control::next("next-to-2", id(1), 2),
        Control::prev("prev-to-1", id(2), 1),
        Control::next("next-to-99", id(2), 99),
    ];

    let navigator = StepNavigator::new(sections, indicators, controls).unwrap();
    Page::new(
        navigator,
        ["create-profile".to_string()],
        "/profile/create/",
        RecordingForm::new(),
    )
}

fn visible(page: &Page<RecordingForm>) -> Vec<u32> {
    page.navigator()
        .snapshot()
        .visible_sections
        .into_iter()
        .map(SectionId::get)
        .collect()
}

fn active(page: &Page<RecordingForm>) -> Vec<u32> {
    page.navigator()
        .snapshot()
        .active_indicators
        .into_iter()
        .map(SectionId::get)
        .collect()
}

#[test]
fn test_next_shows_second_section() {
    let mut page = three_step_page();

    page.dispatch("next-to-2", ActivationSource::Pointer).unwrap();

    assert_eq!(visible(&page), vec![2]);
    assert_eq!(active(&page), vec![2]);
    let classes: Vec<_> = page
        .navigator()
        .sections()
        .iter()
        .map(Section::class_list)
        .collect();
    assert_eq!(classes, vec!["form-step", "form-step active", "form-step"]);
}

#[test]
fn test_prev_returns_to_first_section() {
    let mut page = three_step_page();

    page.dispatch("next-to-2", ActivationSource::Pointer).unwrap();
    page.dispatch("prev-to-1", ActivationSource::Keyboard).unwrap();

    assert_eq!(visible(&page), vec![1]);
    assert_eq!(active(&page), vec![1]);
}

#[test]
fn test_unknown_target_hides_everything() {
    let mut page = three_step_page();

    let outcome = page.dispatch("next-to-99", ActivationSource::Pointer).unwrap();

    assert_eq!(outcome, Outcome::Navigated(Transition::Cleared(99)));
    assert!(visible(&page).is_empty());
    assert!(active(&page).is_empty());
}

#[test]
fn test_navigation_never_submits_form() {
    let mut page = three_step_page();

    for control in ["next-to-2", "prev-to-1", "next-to-99", "next-to-2"] {
        page.dispatch(control, ActivationSource::Pointer).unwrap();
        page.dispatch(control, ActivationSource::Keyboard).unwrap();
    }

    assert!(page.form().submissions().is_empty());
}

#[test]
fn test_submit_after_navigation() {
    let mut page = three_step_page();

    page.set_field("full_name", "Grace Hopper");
    page.dispatch("next-to-2", ActivationSource::Pointer).unwrap();
    page.set_field("bio", "Compilers and COBOL");
    page.dispatch("create-profile", ActivationSource::Pointer).unwrap();

    let submissions = page.form().submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].field("full_name"), Some("Grace Hopper"));
    assert_eq!(submissions[0].field("bio"), Some("Compilers and COBOL"));
    assert_eq!(submissions[0].field("location"), Some(""));
    // Submitting does not move the wizard.
    assert_eq!(visible(&page), vec![2]);
}

#[test]
fn test_profile_layout_walkthrough() {
    let mut page = WizardLayout::profile()
        .into_page(UnknownTargetPolicy::Clear, RecordingForm::new())
        .unwrap();

    for (control, expected) in [
        ("step1-next", 2),
        ("step2-next", 3),
        ("step3-prev", 2),
        ("step2-prev", 1),
    ] {
        page.dispatch(control, ActivationSource::Pointer).unwrap();
        assert_eq!(visible(&page), vec![expected], "after {control}");
        assert_eq!(active(&page), vec![expected], "after {control}");
    }
}

#[test]
fn test_keep_current_policy_refuses_unknown_target() {
    let layout = WizardLayout::from_toml_str(
        r#"
        [[sections]]
        id = 1
        title = "One"
        initial = true

        [[sections]]
        id = 2
        title = "Two"

        [[controls]]
        name = "dangling"
        direction = "next"
        source = 1
        target = 7
        "#,
    )
    .unwrap();

    let mut page = layout
        .into_page(UnknownTargetPolicy::KeepCurrent, RecordingForm::new())
        .unwrap();

    let outcome = page.dispatch("dangling", ActivationSource::Pointer).unwrap();
    assert_eq!(outcome, Outcome::Navigated(Transition::Refused(7)));
    assert_eq!(visible(&page), vec![1]);
}

#[test]
fn test_zero_target_layout_hides_everything() {
    let layout = WizardLayout::from_toml_str(
        r#"
        submit = ["create-profile"]

        [[sections]]
        id = 1
        title = "One"
        initial = true

        [[sections]]
        id = 2
        title = "Two"

        [[indicators]]
        id = 1
        label = "One"

        [[indicators]]
        id = 2
        label = "Two"

        [[controls]]
        name = "to-zero"
        direction = "next"
        source = 1
        target = 0
        "#,
    )
    .unwrap();

    let mut page = layout
        .into_page(UnknownTargetPolicy::Clear, RecordingForm::new())
        .unwrap();
    assert_eq!(visible(&page), vec![1]);

    let outcome = page.dispatch("to-zero", ActivationSource::Keyboard).unwrap();
    assert_eq!(outcome, Outcome::Navigated(Transition::Cleared(0)));
    assert!(visible(&page).is_empty());
    assert!(active(&page).is_empty());
    assert!(page.form().submissions().is_empty());
}
