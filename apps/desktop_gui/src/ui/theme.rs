//! Status palette shared by the editor radios and the report badges.

use eframe::egui;
use shared::domain::ComplianceStatus;

pub const MET_GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
pub const NOT_MET_RED: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
pub const NOT_APPLICABLE_BLUE: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
pub const PENDING_YELLOW: egui::Color32 = egui::Color32::from_rgb(202, 138, 4);

pub fn status_color(status: &ComplianceStatus) -> egui::Color32 {
    match status {
        ComplianceStatus::Met => MET_GREEN,
        ComplianceStatus::NotMet => NOT_MET_RED,
        ComplianceStatus::NotApplicable => NOT_APPLICABLE_BLUE,
        ComplianceStatus::Pending | ComplianceStatus::Unrecognized(_) => PENDING_YELLOW,
    }
}

pub fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}
