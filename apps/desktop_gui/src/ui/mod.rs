//! UI layer for the checklist window: app shell, category editors, report and status palette.

pub mod app;
pub mod category_editor;
pub mod report;
pub mod theme;

pub use app::ChecklistApp;
