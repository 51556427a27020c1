//! Folder data sources: the embedded sample dataset and JSON files on disk.

use crate::core::error::OrgFoldersError;
use crate::core::folder::{Folder, OrgId};
use rust_embed::RustEmbed;
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// Organization that owns the first tree of the embedded sample.
pub const DEFAULT_ORG_ID: &str = "c1556e17-b7c0-45a3-a6ae-9546248fb17a";

const SAMPLE_FILE: &str = "sample.json";

#[derive(RustEmbed)]
#[folder = "data/"]
#[include = "*.json"]
struct SampleAssets;

pub fn default_org_id() -> OrgId {
    Uuid::parse_str(DEFAULT_ORG_ID).unwrap_or_default()
}

/// Folders baked into the binary at compile time.
pub fn sample_folders() -> Result<Vec<Folder>, OrgFoldersError> {
    let file = SampleAssets::get(SAMPLE_FILE)
        .ok_or_else(|| OrgFoldersError::NotFound(format!("embedded {}", SAMPLE_FILE)))?;
    parse_folders(&file.data)
}

/// Read a JSON array of folders from `path`.
pub fn load_folders(path: &Path) -> Result<Vec<Folder>, OrgFoldersError> {
    let bytes = fs::read(path).map_err(OrgFoldersError::IoError)?;
    let folders = parse_folders(&bytes)?;
    tracing::debug!(path = %path.display(), count = folders.len(), "loaded folders");
    Ok(folders)
}

fn parse_folders(bytes: &[u8]) -> Result<Vec<Folder>, OrgFoldersError> {
    Ok(serde_json::from_slice(bytes)?)
}
