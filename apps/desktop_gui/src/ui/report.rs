//! Compliance report: summary cards followed by the per-function breakdown.

use compliance_core::{Summary, WorkingTree};
use eframe::egui;
use shared::domain::ComplianceCategory;

use crate::ui::theme::{
    lighten_color, status_color, MET_GREEN, NOT_APPLICABLE_BLUE, NOT_MET_RED, PENDING_YELLOW,
};

pub const REPORT_TITLE: &str = "Compliance Report Summary";
pub const BREAKDOWN_TITLE: &str = "Detailed Breakdown:";

/// Labelled values for the four summary cards, in display order.
pub fn summary_cards(summary: &Summary) -> [(&'static str, usize, egui::Color32); 4] {
    [
        ("Controls Met", summary.met, MET_GREEN),
        ("Controls Not Met", summary.not_met, NOT_MET_RED),
        ("Not Applicable", summary.not_applicable, NOT_APPLICABLE_BLUE),
        ("Pending Review", summary.pending, PENDING_YELLOW),
    ]
}

pub fn category_heading(category: &ComplianceCategory) -> String {
    format!("{}: {}", category.id, category.name)
}

/// Notes line shown under a category, only when notes were entered.
pub fn notes_line(category: &ComplianceCategory) -> Option<String> {
    (!category.notes.is_empty()).then(|| format!("Notes: {}", category.notes))
}

pub fn show_report(ui: &mut egui::Ui, summary: &Summary, tree: &WorkingTree) {
    ui.add_space(12.0);
    ui.heading(REPORT_TITLE);
    ui.add_space(8.0);

    ui.columns(4, |columns| {
        for (column, (label, value, color)) in columns.iter_mut().zip(summary_cards(summary)) {
            egui::Frame::new()
                .fill(lighten_color(color, 0.85))
                .stroke(egui::Stroke::new(1.0, color))
                .corner_radius(10.0)
                .inner_margin(egui::Margin::symmetric(12, 10))
                .show(column, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(label).color(color).strong());
                    ui.label(egui::RichText::new(value.to_string()).color(color).size(28.0));
                });
        }
    });

    ui.add_space(12.0);
    ui.label(egui::RichText::new(BREAKDOWN_TITLE).strong().size(18.0));
    for function in tree.functions() {
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(format!("{} Function", function.name))
                .strong()
                .size(16.0),
        );
        for category in &function.categories {
            ui.horizontal_wrapped(|ui| {
                ui.label("•");
                ui.label(egui::RichText::new(category_heading(category)).strong());
                ui.label("-");
                ui.label(
                    egui::RichText::new(category.status.badge_label())
                        .color(status_color(&category.status))
                        .strong(),
                );
            });
            if let Some(notes) = notes_line(category) {
                ui.indent(("report_notes", category.id.as_str()), |ui| {
                    ui.label(egui::RichText::new(notes).italics().weak());
                });
            }
        }
    }
}
