//! In-memory folder store.
//!
//! The store owns an ordered collection of [`Folder`] records spanning any number of
//! organizations. Queries return filtered copies and the move operation returns the
//! rewritten state of one organization; the stored collection itself is never mutated.

use crate::core::error::FolderError;
use crate::core::folder::{Folder, OrgId, child_path};
use crate::core::matching::PathMatch;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct FolderStore {
    folders: Vec<Folder>,
    match_mode: PathMatch,
}

impl FolderStore {
    /// Build a store over `folders`. Duplicate names are allowed; lookups take the first match.
    pub fn new(folders: Vec<Folder>) -> Self {
        Self {
            folders,
            match_mode: PathMatch::default(),
        }
    }

    /// Build a store, rejecting any name that repeats within one organization.
    pub fn try_new_unique(folders: Vec<Folder>) -> Result<Self, FolderError> {
        let mut seen: FxHashSet<(OrgId, &str)> = FxHashSet::default();
        for folder in &folders {
            if !seen.insert((folder.org_id, folder.name.as_str())) {
                return Err(FolderError::DuplicateFolderName {
                    org_id: folder.org_id,
                    name: folder.name.clone(),
                });
            }
        }
        Ok(Self::new(folders))
    }

    pub fn with_match_mode(mut self, match_mode: PathMatch) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn match_mode(&self) -> PathMatch {
        self.match_mode
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Distinct organization ids in first-seen order.
    pub fn org_ids(&self) -> Vec<OrgId> {
        let mut seen = FxHashSet::default();
        self.folders
            .iter()
            .filter(|f| seen.insert(f.org_id))
            .map(|f| f.org_id)
            .collect()
    }

    /// Every folder belonging to `org_id`, in store order.
    pub fn folders_by_org(&self, org_id: OrgId) -> Vec<Folder> {
        self.folders
            .iter()
            .filter(|f| f.org_id == org_id)
            .cloned()
            .collect()
    }

    /// Every folder in `org_id` that lives below the folder called `name`.
    ///
    /// The named folder itself is never part of the result.
    pub fn child_folders(&self, org_id: OrgId, name: &str) -> Result<Vec<Folder>, FolderError> {
        if !self.folders.iter().any(|f| f.name == name) {
            return Err(FolderError::FolderNotFound(name.to_string()));
        }

        let in_org: Vec<&Folder> = self.folders.iter().filter(|f| f.org_id == org_id).collect();
        if !in_org.iter().any(|f| f.name == name) {
            return Err(FolderError::FolderNotInOrganization {
                org_id,
                name: name.to_string(),
            });
        }

        let children: Vec<Folder> = in_org
            .into_iter()
            .filter(|f| f.name != name && self.match_mode.is_descendant(f, name))
            .cloned()
            .collect();

        debug!(
            org_id = %org_id,
            folder = name,
            mode = %self.match_mode,
            count = children.len(),
            "child folder query"
        );
        Ok(children)
    }

    /// Move the folder called `source` (with its subtree) under the folder called
    /// `destination`.
    ///
    /// Returns the complete post-move state of the source's organization only; folders of
    /// other organizations are not part of the result.
    pub fn move_folder(&self, source: &str, destination: &str) -> Result<Vec<Folder>, FolderError> {
        let result = self.plan_move(source, destination);
        match &result {
            Ok(moved) => info!(
                source,
                destination,
                mode = %self.match_mode,
                folders = moved.len(),
                "folder moved"
            ),
            Err(e) => debug!(source, destination, error = %e, "folder move rejected"),
        }
        result
    }

    fn plan_move(&self, source: &str, destination: &str) -> Result<Vec<Folder>, FolderError> {
        if source == destination {
            return Err(FolderError::CannotMoveToSelf);
        }

        let src = self
            .find(source)
            .ok_or_else(|| FolderError::SourceNotFound(source.to_string()))?;
        let dst = self
            .find(destination)
            .ok_or_else(|| FolderError::DestinationNotFound(destination.to_string()))?;

        if dst.is_below(&src.path) {
            return Err(FolderError::CannotMoveToDescendantOfSelf);
        }
        if src.org_id != dst.org_id {
            return Err(FolderError::CrossOrganizationMove);
        }

        let new_prefix = child_path(&dst.path, &src.name);
        let moved = self
            .folders
            .iter()
            .filter(|f| f.org_id == src.org_id)
            .map(|f| {
                match self
                    .match_mode
                    .rewrite(f, &src.name, &src.path, &new_prefix)
                {
                    Some(path) => Folder {
                        path,
                        ..f.clone()
                    },
                    None => f.clone(),
                }
            })
            .collect();
        Ok(moved)
    }

    fn find(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.name == name)
    }
}
