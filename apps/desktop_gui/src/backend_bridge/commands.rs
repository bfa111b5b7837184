//! Backend commands queued from UI to backend worker.

use std::time::Duration;

use compliance_core::CatalogSource;

#[derive(Debug)]
pub enum BackendCommand {
    LoadCatalog {
        source: CatalogSource,
        delay: Duration,
    },
    CancelLoad,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadCatalog { .. } => "load_catalog",
            BackendCommand::CancelLoad => "cancel_load",
        }
    }
}
