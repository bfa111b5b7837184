//! Backend bridge: command queue from the UI and the worker thread that runs
//! the catalog load.

pub mod commands;
pub mod runtime;
