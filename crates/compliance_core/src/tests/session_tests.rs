use super::*;
use crate::test_fixtures::{category, govern_framework};
use shared::domain::ComplianceStatus;

#[test]
fn starts_loading_with_report_hidden() {
    let session = ChecklistSession::new();
    assert_eq!(session.phase(), LoadPhase::Loading);
    assert!(!session.show_report());
    assert_eq!(session.report_button_label(), "Generate Compliance Report");
    assert_eq!(session.tree().category_count(), 0);
}

#[test]
fn load_completion_initializes_working_tree() {
    let mut session = ChecklistSession::new();
    assert!(session.complete_load(govern_framework()));

    assert_eq!(session.phase(), LoadPhase::Ready);
    assert_eq!(session.framework().functions.len(), 1);
    assert_eq!(session.tree().category_count(), 2);
    assert_eq!(session.summary().pending, 2);
}

#[test]
fn empty_framework_still_reaches_ready() {
    let mut session = ChecklistSession::new();
    assert!(session.complete_load(Framework::empty()));
    assert!(session.is_ready());
    assert!(session.framework().functions.is_empty());
    assert_eq!(session.summary().total(), 0);
}

#[test]
fn late_load_completion_keeps_edits() {
    let mut session = ChecklistSession::new();
    session.complete_load(govern_framework());
    session.update_field("GV.OC", FieldUpdate::Status(ComplianceStatus::Met));

    assert!(!session.complete_load(govern_framework()));
    assert_eq!(
        session.tree().category("GV.OC").map(|c| &c.status),
        Some(&ComplianceStatus::Met)
    );
}

#[test]
fn toggling_report_twice_restores_hidden_state_and_data() {
    let mut session = ChecklistSession::new();
    session.complete_load(govern_framework());
    session.update_field("GV.RM", FieldUpdate::Notes("board minutes".to_string()));
    let before = session.tree().clone();

    assert!(session.toggle_report());
    assert_eq!(session.report_button_label(), "Hide Report");
    assert!(!session.toggle_report());
    assert_eq!(session.report_button_label(), "Generate Compliance Report");
    assert_eq!(session.tree(), &before);
}

#[test]
fn report_toggle_is_independent_of_load_phase() {
    let mut session = ChecklistSession::new();
    assert!(session.toggle_report());
    assert_eq!(session.phase(), LoadPhase::Loading);
}

#[test]
fn category_view_prefers_working_record() {
    let mut session = ChecklistSession::new();
    session.complete_load(govern_framework());
    session.update_field("GV.OC", FieldUpdate::Status(ComplianceStatus::NotApplicable));

    let catalog_entry = session.framework().functions[0].categories[0].clone();
    let view = session.category_view(&catalog_entry);
    assert!(matches!(view, Cow::Borrowed(_)));
    assert_eq!(view.status, ComplianceStatus::NotApplicable);
}

#[test]
fn category_view_falls_back_to_catalog_entry() {
    let session = ChecklistSession::new();
    let view = session.category_view(&category("PR.AA", "Identity Management"));
    assert!(matches!(view, Cow::Owned(_)));
    assert_eq!(view.status, ComplianceStatus::Pending);
    assert!(view.notes.is_empty());
}
