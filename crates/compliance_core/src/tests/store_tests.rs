use super::*;
use crate::test_fixtures::{govern_framework, two_function_framework};
use proptest::prelude::*;
use shared::domain::ComplianceStatus;

#[test]
fn initial_tree_is_all_pending_with_empty_notes() {
    let tree = WorkingTree::initialize(&two_function_framework());
    assert_eq!(tree.category_count(), 5);
    for category in tree.categories() {
        assert_eq!(category.status, ComplianceStatus::Pending);
        assert!(category.notes.is_empty());
    }
}

#[test]
fn initialize_keeps_catalog_order_and_text() {
    let framework = two_function_framework();
    let tree = WorkingTree::initialize(&framework);
    let ids: Vec<&str> = tree.categories().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["GV.OC", "GV.RM", "ID.AM", "ID.RA", "ID.IM"]);
    assert_eq!(tree.functions()[1].name, "Identify");
    assert_eq!(
        tree.category("ID.RA").map(|c| c.description.as_str()),
        Some("Risk Assessment description")
    );
}

#[test]
fn pure_update_leaves_source_tree_untouched() {
    let tree = WorkingTree::initialize(&govern_framework());
    let next = tree.update_field("GV.OC", FieldUpdate::Status(ComplianceStatus::Met));

    assert_eq!(
        tree.category("GV.OC").map(|c| &c.status),
        Some(&ComplianceStatus::Pending)
    );
    assert_eq!(
        next.category("GV.OC").map(|c| &c.status),
        Some(&ComplianceStatus::Met)
    );
    assert_eq!(next.category("GV.RM"), tree.category("GV.RM"));
}

#[test]
fn last_status_write_wins_and_touches_nothing_else() {
    let mut store = ComplianceStore::new();
    store.initialize(&two_function_framework());
    let before = store.tree().clone();

    assert!(store.update_field("GV.OC", FieldUpdate::Status(ComplianceStatus::Met)));
    assert!(store.update_field("GV.OC", FieldUpdate::Status(ComplianceStatus::NotMet)));

    let after = store.tree();
    assert_eq!(
        after.category("GV.OC").map(|c| &c.status),
        Some(&ComplianceStatus::NotMet)
    );
    for (old, new) in before.categories().zip(after.categories()) {
        if old.id.as_str() != "GV.OC" {
            assert_eq!(old, new);
        }
    }
}

#[test]
fn unknown_category_is_a_silent_no_op() {
    let mut store = ComplianceStore::new();
    store.initialize(&govern_framework());
    let before = store.tree().clone();

    assert!(!store.update_field("XX.YY", FieldUpdate::Notes("ignored".to_string())));
    assert_eq!(store.tree(), &before);

    let pure = before.update_field("XX.YY", FieldUpdate::Status(ComplianceStatus::Met));
    assert_eq!(pure, before);
}

#[test]
fn notes_updates_are_stored_verbatim() {
    let mut store = ComplianceStore::new();
    store.initialize(&govern_framework());
    store.update_field("GV.RM", FieldUpdate::Notes("  see policy v3\nline two ".to_string()));
    assert_eq!(
        store.tree().category("GV.RM").map(|c| c.notes.as_str()),
        Some("  see policy v3\nline two ")
    );
}

#[test]
fn indexed_lookup_tracks_updates_and_reinitialize() {
    let mut store = ComplianceStore::new();
    assert!(store.category("GV.OC").is_none());

    store.initialize(&two_function_framework());
    for id in store.tree().category_ids() {
        assert_eq!(store.category(id.as_str()), store.tree().category(id.as_str()));
    }

    store.update_field("ID.IM", FieldUpdate::Notes("quarterly review".to_string()));
    assert_eq!(
        store.category("ID.IM").map(|c| c.notes.as_str()),
        Some("quarterly review")
    );

    store.initialize(&govern_framework());
    assert!(store.category("ID.IM").is_none());
    assert_eq!(
        store.category("GV.RM").map(|c| c.name.as_str()),
        Some("Risk Management Strategy")
    );
}

#[test]
fn raw_updates_accept_any_status_string() {
    let mut store = ComplianceStore::new();
    store.initialize(&govern_framework());

    assert!(store.update_raw("GV.OC", "status", "Maybe"));
    assert_eq!(
        store.tree().category("GV.OC").map(|c| c.status.as_answer()),
        Some("Maybe")
    );
    assert!(store.update_raw("GV.OC", "status", "N/A"));
    assert_eq!(
        store.tree().category("GV.OC").map(|c| &c.status),
        Some(&ComplianceStatus::NotApplicable)
    );
    assert!(!store.update_raw("GV.OC", "owner", "alice"));
}

#[test]
fn reinitialize_discards_edits() {
    let framework = govern_framework();
    let mut store = ComplianceStore::new();
    store.initialize(&framework);
    store.update_field("GV.OC", FieldUpdate::Status(ComplianceStatus::Met));

    store.initialize(&framework);
    assert_eq!(store.tree(), &WorkingTree::initialize(&framework));
}

fn arb_update() -> impl Strategy<Value = (String, FieldUpdate)> {
    let id = prop_oneof![
        Just("GV.OC".to_string()),
        Just("GV.RM".to_string()),
        Just("ID.AM".to_string()),
        Just("ID.RA".to_string()),
        Just("ID.IM".to_string()),
        "[A-Z]{2}\\.[A-Z]{2}",
    ];
    let update = prop_oneof![
        prop_oneof![Just(""), Just("Yes"), Just("No"), Just("N/A"), Just("other")]
            .prop_map(|answer| FieldUpdate::Status(ComplianceStatus::from_answer(answer))),
        ".{0,16}".prop_map(FieldUpdate::Notes),
    ];
    (id, update)
}

proptest! {
    #[test]
    fn prop_updates_never_add_or_remove_categories(
        updates in proptest::collection::vec(arb_update(), 0..40)
    ) {
        let framework = two_function_framework();
        let expected: Vec<_> = framework.categories().map(|c| c.id.clone()).collect();

        let mut store = ComplianceStore::new();
        store.initialize(&framework);
        for (id, update) in updates {
            store.update_field(&id, update);
        }

        prop_assert_eq!(store.tree().category_ids(), expected);
    }

    #[test]
    fn prop_store_and_pure_update_agree(
        updates in proptest::collection::vec(arb_update(), 0..20)
    ) {
        let framework = two_function_framework();
        let mut store = ComplianceStore::new();
        store.initialize(&framework);
        let mut pure = WorkingTree::initialize(&framework);
        for (id, update) in updates {
            store.update_field(&id, update.clone());
            pure = pure.update_field(&id, update);
        }

        prop_assert_eq!(store.tree(), &pure);
    }
}
