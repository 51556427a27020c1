//! The folder record and helpers over its dot-delimited path.
//!
//! A folder's position in its organization's tree is encoded entirely in `path`:
//! a root folder's path is its own name, a child's path is `parent.path + "." + name`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Separator between segments of a folder path.
pub const DELIMITER: char = '.';

/// Organization identifier. Folders in different organizations never share a tree.
pub type OrgId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    pub org_id: OrgId,
    #[serde(rename = "paths", alias = "path")]
    pub path: String,
}

impl Folder {
    pub fn new(name: impl Into<String>, org_id: OrgId, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            org_id,
            path: path.into(),
        }
    }

    /// Path segments from the root down to this folder.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split(DELIMITER)
    }

    /// Path of the parent folder, `None` for a root.
    pub fn parent_path(&self) -> Option<&str> {
        self.path.rsplit_once(DELIMITER).map(|(parent, _)| parent)
    }

    /// True when `name` is one of this folder's ancestor segments.
    pub fn has_ancestor_segment(&self, name: &str) -> bool {
        let mut segments = self.segments().peekable();
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                return false;
            }
            if segment == name {
                return true;
            }
        }
        false
    }

    /// True when this folder lives anywhere below `ancestor_path`.
    pub fn is_below(&self, ancestor_path: &str) -> bool {
        self.path
            .strip_prefix(ancestor_path)
            .is_some_and(|rest| rest.starts_with(DELIMITER))
    }

    /// True when this folder is `ancestor_path` itself or lives anywhere below it.
    pub fn is_within(&self, ancestor_path: &str) -> bool {
        self.path == ancestor_path || self.is_below(ancestor_path)
    }
}

/// Join a parent path and a child name.
pub fn child_path(parent: &str, name: &str) -> String {
    format!("{}{}{}", parent, DELIMITER, name)
}
