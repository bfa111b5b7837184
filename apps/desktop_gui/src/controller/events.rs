//! Backend events and user intents handled by the checklist controller.

use shared::domain::{CategoryId, ComplianceStatus, FieldUpdate, Framework};

/// Events delivered from the backend worker to the UI thread.
#[derive(Debug)]
pub enum UiEvent {
    CatalogLoaded(Framework),
}

/// Intents emitted by views while rendering a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    SetStatus {
        category_id: CategoryId,
        status: ComplianceStatus,
    },
    SetNotes {
        category_id: CategoryId,
        notes: String,
    },
    ToggleReport,
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::SetStatus { .. } => "set_status",
            UiAction::SetNotes { .. } => "set_notes",
            UiAction::ToggleReport => "toggle_report",
        }
    }

    /// Splits a field edit into the target category and the store update.
    pub fn into_field_update(self) -> Option<(CategoryId, FieldUpdate)> {
        match self {
            UiAction::SetStatus {
                category_id,
                status,
            } => Some((category_id, FieldUpdate::Status(status))),
            UiAction::SetNotes { category_id, notes } => {
                Some((category_id, FieldUpdate::Notes(notes)))
            }
            UiAction::ToggleReport => None,
        }
    }
}
