//! Editor card for a single category: description, Yes/No/N/A radios and the
//! notes area.

use eframe::egui;
use shared::domain::{ComplianceCategory, ComplianceStatus};

use crate::controller::events::UiAction;
use crate::ui::theme::{lighten_color, status_color};

pub const NOTES_LABEL: &str = "Notes/Evidence:";
pub const NOTES_PLACEHOLDER: &str = "Add notes or evidence here...";

/// Which radio is checked for `status`; none while pending or unrecognized.
pub fn checked_choice(status: &ComplianceStatus) -> Option<usize> {
    ComplianceStatus::SELECTABLE
        .iter()
        .position(|choice| choice == status)
}

pub fn show_category_editor(
    ui: &mut egui::Ui,
    category: &ComplianceCategory,
    actions: &mut Vec<UiAction>,
) {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .stroke(egui::Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(format!("{}: {}", category.id, category.name))
                    .strong()
                    .size(16.0),
            );
            ui.label(category.description.as_str());
            ui.add_space(4.0);

            let checked = checked_choice(&category.status);
            ui.horizontal(|ui| {
                for (index, choice) in ComplianceStatus::SELECTABLE.iter().enumerate() {
                    let text = egui::RichText::new(choice.as_answer()).color(status_color(choice));
                    if ui.radio(checked == Some(index), text).clicked() && checked != Some(index) {
                        actions.push(UiAction::SetStatus {
                            category_id: category.id.clone(),
                            status: choice.clone(),
                        });
                    }
                }
            });

            ui.add_space(4.0);
            ui.label(egui::RichText::new(NOTES_LABEL).small());
            let mut notes = category.notes.clone();
            let edit = egui::TextEdit::multiline(&mut notes)
                .id_salt(("notes", category.id.as_str()))
                .desired_rows(3)
                .desired_width(f32::INFINITY)
                .hint_text(
                    egui::RichText::new(NOTES_PLACEHOLDER)
                        .color(lighten_color(ui.visuals().weak_text_color(), 0.1)),
                );
            if ui.add(edit).changed() {
                actions.push(UiAction::SetNotes {
                    category_id: category.id.clone(),
                    notes,
                });
            }
        });
}
