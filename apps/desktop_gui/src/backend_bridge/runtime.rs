//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use compliance_core::CatalogLoadTask;
use crossbeam_channel::{Receiver, Sender};
use shared::domain::Framework;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Starts the backend worker thread. It exits, aborting any pending load,
/// once every command sender has been dropped.
pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || run_worker(cmd_rx, ui_tx))
}

fn run_worker(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!("failed to build backend runtime: {err}");
            if ui_tx.try_send(UiEvent::CatalogLoaded(Framework::empty())).is_err() {
                tracing::debug!("ui event queue closed; dropping fallback catalog event");
            }
            return;
        }
    };

    runtime.block_on(async move {
        let mut pending: Option<CatalogLoadTask> = None;
        while let Ok(cmd) = cmd_rx.recv() {
            tracing::debug!(command = cmd.name(), "backend received command");
            match cmd {
                BackendCommand::LoadCatalog { source, delay } => {
                    let ui_tx = ui_tx.clone();
                    pending = Some(CatalogLoadTask::spawn(source, delay, move |framework| {
                        if ui_tx.try_send(UiEvent::CatalogLoaded(framework)).is_err() {
                            tracing::debug!("ui event queue closed; dropping catalog load result");
                        }
                    }));
                }
                BackendCommand::CancelLoad => {
                    if let Some(task) = pending.take() {
                        task.abort();
                    }
                }
            }
        }
        if let Some(task) = pending.take() {
            task.abort();
        }
        tracing::debug!("backend worker stopped");
    });
}
