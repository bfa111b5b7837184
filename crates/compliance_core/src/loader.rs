//! Startup catalog load: a fixed simulated delay followed by reading the
//! framework, run as an abortable tokio task.

use std::{path::PathBuf, time::Duration};

use shared::{
    catalog::{bundled_catalog, load_catalog_file},
    domain::Framework,
    error::CatalogError,
};
use tokio::task::JoinHandle;

pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Bundled,
    File(PathBuf),
}

impl CatalogSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(path),
            None => Self::Bundled,
        }
    }

    pub fn read(&self) -> Result<Framework, CatalogError> {
        match self {
            Self::Bundled => bundled_catalog(),
            Self::File(path) => load_catalog_file(path),
        }
    }
}

/// Waits `delay`, then reads the catalog. A failed read is logged and yields
/// an empty framework so the checklist still reaches its ready state.
pub async fn load_framework(source: CatalogSource, delay: Duration) -> Framework {
    tokio::time::sleep(delay).await;
    match source.read() {
        Ok(framework) => {
            tracing::info!(
                functions = framework.functions.len(),
                categories = framework.category_count(),
                "loaded CSF catalog"
            );
            framework
        }
        Err(err) => {
            tracing::error!(?source, "failed to load CSF catalog: {err}");
            Framework::empty()
        }
    }
}

/// Handle to an in-flight catalog load. Dropping or aborting it before the
/// delay elapses guarantees the completion callback never runs.
pub struct CatalogLoadTask {
    handle: JoinHandle<()>,
}

impl CatalogLoadTask {
    /// Spawns the load on the current tokio runtime and hands the framework to
    /// `on_loaded` once it is available.
    pub fn spawn<F>(source: CatalogSource, delay: Duration, on_loaded: F) -> Self
    where
        F: FnOnce(Framework) + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let framework = load_framework(source, delay).await;
            on_loaded(framework);
        });
        Self { handle }
    }

    pub fn abort(&self) {
        if !self.handle.is_finished() {
            tracing::debug!("aborting pending catalog load");
        }
        self.handle.abort();
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for CatalogLoadTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
