use chrono::Datelike;
use compliance_core::{ChecklistSession, LoadPhase};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::Framework;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::Settings;
use crate::controller::events::{UiAction, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{apply_event, reduce};
use crate::ui::{category_editor::show_category_editor, report::show_report};

pub const APP_TITLE: &str = "NIST CSF 2.0 Compliance Checklist";
pub const APP_TAGLINE: &str = "Assess your organization's adherence to cybersecurity best practices.";
pub const LOADING_TEXT: &str = "Loading CSF Data...";
pub const NO_FUNCTIONS_TEXT: &str = "No functions found or loaded.";

pub fn footer_text(year: i32) -> String {
    format!("© {year} NIST CSF 2.0 Compliance Tool. All rights reserved.")
}

pub struct ChecklistApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    session: ChecklistSession,
}

impl ChecklistApp {
    /// Creates the app and queues the startup catalog load.
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        settings: &Settings,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            session: ChecklistSession::new(),
        };
        let queued = dispatch_backend_command(
            &app.cmd_tx,
            BackendCommand::LoadCatalog {
                source: settings.catalog_source(),
                delay: settings.load_delay(),
            },
        );
        if !queued {
            tracing::error!("catalog load could not be queued; continuing without functions");
            app.session.complete_load(Framework::empty());
        }
        app
    }

    pub fn session(&self) -> &ChecklistSession {
        &self.session
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_event(&mut self.session, event);
        }
    }

    fn show_loading_screen(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.4);
                ui.spinner();
                ui.label(egui::RichText::new(LOADING_TEXT).size(20.0));
            });
        });
    }

    fn show_header(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("checklist_header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.heading(APP_TITLE);
                ui.weak(APP_TAGLINE);
            });
            ui.add_space(8.0);
        });
    }

    /// Text rendered in the footer panel.
    fn footer_lines(&self, year: i32) -> Vec<String> {
        vec![footer_text(year)]
    }

    fn show_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("checklist_footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                for line in self.footer_lines(chrono::Local::now().year()) {
                    ui.weak(line);
                }
            });
        });
    }

    fn show_checklist(&self, ctx: &egui::Context) -> Vec<UiAction> {
        let mut actions = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("checklist_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let functions = &self.session.framework().functions;
                    if functions.is_empty() {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.label(egui::RichText::new(NO_FUNCTIONS_TEXT).size(18.0).weak());
                        });
                    }

                    for function in functions {
                        ui.add_space(10.0);
                        ui.heading(format!("{}: {}", function.id, function.name));
                        ui.label(function.description.as_str());
                        ui.add_space(4.0);
                        for category in &function.categories {
                            let view = self.session.category_view(category);
                            show_category_editor(ui, &view, &mut actions);
                            ui.add_space(6.0);
                        }
                    }

                    ui.add_space(12.0);
                    ui.vertical_centered(|ui| {
                        let label = self.session.report_button_label();
                        if ui
                            .add(egui::Button::new(egui::RichText::new(label).size(16.0)))
                            .clicked()
                        {
                            actions.push(UiAction::ToggleReport);
                        }
                    });

                    if self.session.show_report() {
                        show_report(ui, &self.session.summary(), self.session.tree());
                    }
                    ui.add_space(16.0);
                });
        });
        actions
    }
}

impl eframe::App for ChecklistApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        match self.session.phase() {
            LoadPhase::Loading => {
                self.show_loading_screen(ctx);
                ctx.request_repaint_after(std::time::Duration::from_millis(100));
            }
            LoadPhase::Ready => {
                self.show_header(ctx);
                self.show_footer(ctx);
                let actions = self.show_checklist(ctx);
                if !actions.is_empty() {
                    reduce(&mut self.session, actions);
                    ctx.request_repaint();
                }
            }
        }
    }
}

impl Drop for ChecklistApp {
    fn drop(&mut self) {
        if self.session.phase() == LoadPhase::Loading
            && self.cmd_tx.try_send(BackendCommand::CancelLoad).is_err()
        {
            tracing::debug!("backend worker gone; no pending catalog load to cancel");
        }
    }
}
