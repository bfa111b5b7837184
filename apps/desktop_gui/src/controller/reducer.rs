//! State transitions for the checklist session driven by backend events and
//! view intents.

use compliance_core::ChecklistSession;

use crate::controller::events::{UiAction, UiEvent};

pub fn apply_event(session: &mut ChecklistSession, event: UiEvent) {
    match event {
        UiEvent::CatalogLoaded(framework) => {
            session.complete_load(framework);
        }
    }
}

/// Applies intents in the order the views emitted them.
pub fn reduce(session: &mut ChecklistSession, actions: impl IntoIterator<Item = UiAction>) {
    for action in actions {
        tracing::debug!(action = action.name(), "dispatching ui action");
        match action {
            UiAction::ToggleReport => {
                session.toggle_report();
            }
            edit => {
                if let Some((category_id, update)) = edit.into_field_update() {
                    session.update_field(category_id.as_str(), update);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use compliance_core::{LoadPhase, Summary};
    use shared::domain::{Category, ComplianceStatus, Framework, Function};

    use super::*;

    fn govern() -> Framework {
        let category = |id: &str| Category {
            id: id.into(),
            name: format!("{id} name"),
            description: format!("{id} description"),
        };
        Framework {
            version: "CSF 2.0".to_string(),
            functions: vec![Function {
                id: "GV".into(),
                name: "Govern".to_string(),
                description: "Govern description".to_string(),
                categories: vec![category("GV.OC"), category("GV.RM")],
            }],
        }
    }

    fn ready_session() -> ChecklistSession {
        let mut session = ChecklistSession::new();
        apply_event(&mut session, UiEvent::CatalogLoaded(govern()));
        session
    }

    #[test]
    fn catalog_event_moves_session_to_ready() {
        let session = ready_session();
        assert_eq!(session.phase(), LoadPhase::Ready);
        assert_eq!(session.tree().category_count(), 2);
    }

    #[test]
    fn status_actions_feed_the_summary() {
        let mut session = ready_session();
        reduce(
            &mut session,
            vec![
                UiAction::SetStatus {
                    category_id: "GV.OC".into(),
                    status: ComplianceStatus::Met,
                },
                UiAction::SetStatus {
                    category_id: "GV.RM".into(),
                    status: ComplianceStatus::NotMet,
                },
            ],
        );

        assert_eq!(
            session.summary(),
            Summary {
                met: 1,
                not_met: 1,
                not_applicable: 0,
                pending: 0,
            }
        );
    }

    #[test]
    fn actions_apply_in_dispatch_order() {
        let mut session = ready_session();
        reduce(
            &mut session,
            vec![
                UiAction::SetNotes {
                    category_id: "GV.OC".into(),
                    notes: "d".to_string(),
                },
                UiAction::SetNotes {
                    category_id: "GV.OC".into(),
                    notes: "dr".to_string(),
                },
                UiAction::SetNotes {
                    category_id: "GV.OC".into(),
                    notes: "draft".to_string(),
                },
            ],
        );

        assert_eq!(
            session.tree().category("GV.OC").map(|c| c.notes.as_str()),
            Some("draft")
        );
    }

    #[test]
    fn double_toggle_returns_to_hidden_report() {
        let mut session = ready_session();
        let before = session.tree().clone();
        reduce(&mut session, [UiAction::ToggleReport, UiAction::ToggleReport]);

        assert!(!session.show_report());
        assert_eq!(session.tree(), &before);
    }
}
