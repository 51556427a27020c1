//! Path matching strategies shared by the descendant query and the move rewrite.
//!
//! `Segment` compares whole dot-separated tokens. `Substring` reproduces the legacy
//! raw-substring behavior, where a name like `al` also matches inside `alpha`.

use crate::core::folder::Folder;
use serde::{Deserialize, Serialize};

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PathMatch {
    #[default]
    Segment,
    Substring,
}

impl PathMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathMatch::Segment => "segment",
            PathMatch::Substring => "substring",
        }
    }

    /// Whether `folder` sits below a folder called `name`.
    ///
    /// Callers exclude the folder named `name` itself before asking.
    pub fn is_descendant(&self, folder: &Folder, name: &str) -> bool {
        match self {
            PathMatch::Segment => folder.has_ancestor_segment(name),
            PathMatch::Substring => match (folder.path.find(name), folder.path.find(&folder.name)) {
                (Some(name_at), Some(own_at)) => name_at < own_at,
                _ => false,
            },
        }
    }

    /// New path for `folder` after the folder at `source_path` (named `source_name`) is
    /// re-rooted at `new_prefix`. `None` means the folder is unaffected.
    pub fn rewrite(
        &self,
        folder: &Folder,
        source_name: &str,
        source_path: &str,
        new_prefix: &str,
    ) -> Option<String> {
        match self {
            PathMatch::Segment => {
                if !folder.is_within(source_path) {
                    return None;
                }
                Some(format!("{}{}", new_prefix, &folder.path[source_path.len()..]))
            }
            PathMatch::Substring => {
                if !folder.path.contains(source_name) {
                    return None;
                }
                Some(folder.path.replacen(source_path, new_prefix, 1))
            }
        }
    }
}

impl std::fmt::Display for PathMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
