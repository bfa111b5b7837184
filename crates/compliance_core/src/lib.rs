//! Compliance state for the CSF 2.0 checklist: the working tree store, the
//! summary calculator, the startup catalog loader and the root session that
//! ties them together.

pub mod loader;
pub mod session;
pub mod store;
pub mod summary;

pub use loader::{load_framework, CatalogLoadTask, CatalogSource, DEFAULT_LOAD_DELAY};
pub use session::{ChecklistSession, LoadPhase, HIDE_REPORT_LABEL, SHOW_REPORT_LABEL};
pub use store::{ComplianceStore, WorkingTree};
pub use summary::{summarize, Summary};

#[cfg(test)]
#[path = "tests/fixtures.rs"]
mod test_fixtures;
