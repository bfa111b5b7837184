//! Framework catalog document: parsing, validation and the bundled CSF 2.0 data.

use std::{collections::HashSet, fs, path::Path};

use serde::Deserialize;

use crate::{
    domain::{Framework, Function},
    error::CatalogError,
};

/// Key of the framework entry in the catalog document.
pub const CSF_VERSION_KEY: &str = "CSF 2.0";

/// CSF 2.0 functions and categories shipped with the application.
pub const BUNDLED_CSF_JSON: &str = include_str!("../data/csf-2.0.json");

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(rename = "CSF 2.0")]
    framework: FrameworkBody,
}

#[derive(Debug, Deserialize)]
struct FrameworkBody {
    #[serde(rename = "Functions")]
    functions: Vec<Function>,
}

pub fn parse_catalog(raw: &str) -> Result<Framework, CatalogError> {
    let document: CatalogDocument = serde_json::from_str(raw)?;
    let framework = Framework {
        version: CSF_VERSION_KEY.to_string(),
        functions: document.framework.functions,
    };
    ensure_unique_ids(&framework)?;
    Ok(framework)
}

pub fn load_catalog_file(path: &Path) -> Result<Framework, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&raw)
}

pub fn bundled_catalog() -> Result<Framework, CatalogError> {
    parse_catalog(BUNDLED_CSF_JSON)
}

fn ensure_unique_ids(framework: &Framework) -> Result<(), CatalogError> {
    let mut function_ids = HashSet::new();
    let mut category_ids = HashSet::new();
    for function in &framework.functions {
        if !function_ids.insert(function.id.as_str()) {
            return Err(CatalogError::DuplicateFunction(function.id.to_string()));
        }
        for category in &function.categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.id.to_string()));
            }
        }
    }
    Ok(())
}
