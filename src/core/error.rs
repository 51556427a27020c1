use std::io;
use thiserror::Error;
use uuid::Uuid;

/// Semantic failures of the folder store. None of these are transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FolderError {
    #[error("Folder does not exist: {0}")]
    FolderNotFound(String),
    #[error("Folder does not exist in the specified organization: {name} (org {org_id})")]
    FolderNotInOrganization { org_id: Uuid, name: String },
    #[error("Cannot move a folder to itself")]
    CannotMoveToSelf,
    #[error("Cannot move a folder to a child of itself")]
    CannotMoveToDescendantOfSelf,
    #[error("Source folder does not exist: {0}")]
    SourceNotFound(String),
    #[error("Destination folder does not exist: {0}")]
    DestinationNotFound(String),
    #[error("Cannot move a folder to a different organization")]
    CrossOrganizationMove,
    #[error("Duplicate folder name in organization {org_id}: {name}")]
    DuplicateFolderName { org_id: Uuid, name: String },
}

#[derive(Error, Debug)]
pub enum OrgFoldersError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error(transparent)]
    Folder(#[from] FolderError),
    #[error("Not found: {0}")]
    NotFound(String),
}
