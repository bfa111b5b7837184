//! Root checklist state: load lifecycle, the compliance store and report
//! visibility.

use std::borrow::Cow;

use shared::domain::{Category, ComplianceCategory, FieldUpdate, Framework};

use crate::{
    store::{ComplianceStore, WorkingTree},
    summary::{summarize, Summary},
};

pub const SHOW_REPORT_LABEL: &str = "Generate Compliance Report";
pub const HIDE_REPORT_LABEL: &str = "Hide Report";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
}

#[derive(Debug)]
pub struct ChecklistSession {
    phase: LoadPhase,
    framework: Framework,
    store: ComplianceStore,
    show_report: bool,
}

impl Default for ChecklistSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChecklistSession {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Loading,
            framework: Framework::empty(),
            store: ComplianceStore::new(),
            show_report: false,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    pub fn framework(&self) -> &Framework {
        &self.framework
    }

    pub fn tree(&self) -> &WorkingTree {
        self.store.tree()
    }

    /// Moves `Loading -> Ready` and derives the working tree from `framework`.
    /// Completions arriving once ready are ignored so edits are never wiped.
    pub fn complete_load(&mut self, framework: Framework) -> bool {
        if self.is_ready() {
            tracing::warn!("ignoring catalog load completion after checklist became ready");
            return false;
        }
        self.store.initialize(&framework);
        self.framework = framework;
        self.phase = LoadPhase::Ready;
        tracing::info!(
            functions = self.framework.functions.len(),
            "checklist ready"
        );
        true
    }

    pub fn update_field(&mut self, category_id: &str, update: FieldUpdate) -> bool {
        self.store.update_field(category_id, update)
    }

    pub fn show_report(&self) -> bool {
        self.show_report
    }

    /// Flips report visibility and returns the new value.
    pub fn toggle_report(&mut self) -> bool {
        self.show_report = !self.show_report;
        tracing::debug!(show_report = self.show_report, "toggled compliance report");
        self.show_report
    }

    pub fn report_button_label(&self) -> &'static str {
        if self.show_report {
            HIDE_REPORT_LABEL
        } else {
            SHOW_REPORT_LABEL
        }
    }

    pub fn summary(&self) -> Summary {
        summarize(self.store.tree())
    }

    /// Working record for a catalog category, or the catalog record itself
    /// (as pending) when the tree has no entry for it.
    pub fn category_view<'a>(&'a self, category: &Category) -> Cow<'a, ComplianceCategory> {
        match self.store.category(category.id.as_str()) {
            Some(working) => Cow::Borrowed(working),
            None => Cow::Owned(ComplianceCategory::from(category)),
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
