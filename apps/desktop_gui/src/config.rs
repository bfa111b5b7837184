use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use clap::Parser;
use compliance_core::{CatalogSource, DEFAULT_LOAD_DELAY};
use serde::Deserialize;

pub const DEFAULT_SETTINGS_FILE: &str = "csf_checklist.toml";

#[derive(Parser, Debug, Default)]
#[command(name = "csf_checklist", about = "NIST CSF 2.0 compliance checklist")]
pub struct CliArgs {
    /// Settings file; defaults to ./csf_checklist.toml when present.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Catalog JSON to use instead of the bundled CSF 2.0 data.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Simulated catalog load delay in milliseconds.
    #[arg(long)]
    pub load_delay_ms: Option<u64>,
    /// Log filter used when RUST_LOG is unset.
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub catalog_path: Option<PathBuf>,
    pub load_delay_ms: u64,
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            load_delay_ms: DEFAULT_LOAD_DELAY.as_millis() as u64,
            window_title: "NIST CSF 2.0 Compliance Checklist".into(),
            window_width: 1100.0,
            window_height: 820.0,
            log_level: "info".into(),
        }
    }
}

impl Settings {
    pub fn catalog_source(&self) -> CatalogSource {
        CatalogSource::from_path(self.catalog_path.clone())
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    fn merge_file(&mut self, file_cfg: SettingsFile) {
        if let Some(v) = file_cfg.catalog_path {
            self.catalog_path = Some(v);
        }
        if let Some(v) = file_cfg.load_delay_ms {
            self.load_delay_ms = v;
        }
        if let Some(v) = file_cfg.window_title {
            self.window_title = v;
        }
        if let Some(v) = file_cfg.window_width {
            self.window_width = v;
        }
        if let Some(v) = file_cfg.window_height {
            self.window_height = v;
        }
        if let Some(v) = file_cfg.log_level {
            self.log_level = v;
        }
    }

    fn merge_args(&mut self, args: &CliArgs) {
        if let Some(v) = &args.catalog {
            self.catalog_path = Some(v.clone());
        }
        if let Some(v) = args.load_delay_ms {
            self.load_delay_ms = v;
        }
        if let Some(v) = &args.log_level {
            self.log_level = v.clone();
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    catalog_path: Option<PathBuf>,
    load_delay_ms: Option<u64>,
    window_title: Option<String>,
    window_width: Option<f32>,
    window_height: Option<f32>,
    log_level: Option<String>,
}

/// Defaults, then the settings file, then command-line flags. A settings file
/// that cannot be read or parsed is skipped and its error handed back, so the
/// caller can report it once logging is configured from the result.
pub fn load_settings(args: &CliArgs) -> (Settings, Option<anyhow::Error>) {
    let mut settings = Settings::default();

    let (path, explicit) = match &args.config {
        Some(path) => (path.clone(), true),
        None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
    };
    let mut file_error = None;
    if explicit || path.exists() {
        match read_settings_file(&path) {
            Ok(file_cfg) => settings.merge_file(file_cfg),
            Err(err) => file_error = Some(err),
        }
    }

    settings.merge_args(args);
    (settings, file_error)
}

fn read_settings_file(path: &Path) -> anyhow::Result<SettingsFile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))
}
