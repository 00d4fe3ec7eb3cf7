pub mod filesystem;

use crate::error::{Result, TeaError};
use crate::types::profile::TeaProfile;
use filesystem::{list_profile_files, sha256_hex};
use serde::Serialize;
use std::path::{Path, PathBuf};
use toml::Value;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub profile: TeaProfile,
    pub source: PathBuf,
    pub sha256: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
    pub skipped: Vec<SkippedFile>,
}

/// Loads one profile file or every `*.toml` file below a directory.
///
/// A single file that fails to parse is an error. Inside a directory, broken
/// files are skipped and recorded so the rest of the catalog still loads.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(TeaError::PathNotFound(path.display().to_string()));
    }

    let mut catalog = Catalog::default();
    if path.is_file() {
        catalog.entries = load_file(path)?;
        return Ok(catalog);
    }

    for file in list_profile_files(path) {
        match load_file(&file) {
            Ok(entries) => catalog.entries.extend(entries),
            Err(e) => {
                warn!(path = %file.display(), error = %e, "skipping unreadable profile");
                catalog.skipped.push(SkippedFile {
                    path: file.display().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        loaded = catalog.entries.len(),
        skipped = catalog.skipped.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

fn load_file(path: &Path) -> Result<Vec<CatalogEntry>> {
    let bytes = std::fs::read(path)?;
    let sha256 = sha256_hex(&bytes);
    let content = String::from_utf8(bytes)
        .map_err(|e| TeaError::ProfileParse(format!("{}: {}", path.display(), e)))?;
    let profiles = parse_profiles(&content)
        .map_err(|e| TeaError::ProfileParse(format!("{}: {}", path.display(), e)))?;

    Ok(profiles
        .into_iter()
        .map(|profile| CatalogEntry {
            profile,
            source: path.to_path_buf(),
            sha256: sha256.clone(),
        })
        .collect())
}

/// A file holds either a `[[tea]]` array or a single top-level profile.
fn parse_profiles(content: &str) -> std::result::Result<Vec<TeaProfile>, toml::de::Error> {
    let mut value: Value = toml::from_str(content)?;
    let teas = value.as_table_mut().and_then(|table| table.remove("tea"));
    match teas {
        Some(teas) => teas.try_into(),
        None => value.try_into().map(|profile| vec![profile]),
    }
}
