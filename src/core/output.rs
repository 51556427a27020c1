//! Rendering helpers for CLI surfaces.
//!
//! Every renderer takes a folder sequence and returns a `String`; printing is left to the
//! caller so stdout stays the only place results land.

use crate::core::error::OrgFoldersError;
use crate::core::folder::{DELIMITER, Folder, OrgId};
use colored::Colorize;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Flat,
    Tree,
}

pub fn render(folders: &[Folder], format: OutputFormat, color: bool) -> Result<String, OrgFoldersError> {
    match format {
        OutputFormat::Json => render_json(folders),
        OutputFormat::Flat => Ok(render_flat(folders)),
        OutputFormat::Tree => Ok(render_tree(folders, color)),
    }
}

pub fn render_json(folders: &[Folder]) -> Result<String, OrgFoldersError> {
    Ok(serde_json::to_string_pretty(folders)?)
}

/// One `<org id>  <path>` line per folder, in input order.
pub fn render_flat(folders: &[Folder]) -> String {
    folders
        .iter()
        .map(|f| format!("{}  {}", f.org_id, f.path))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indented tree per organization, built from path segments.
///
/// A folder hangs off the nearest ancestor path present in `folders`; if none is present it
/// is drawn at the root and labelled with its full path so the gap stays visible.
pub fn render_tree(folders: &[Folder], color: bool) -> String {
    let mut orgs: Vec<OrgId> = Vec::new();
    let mut by_org: FxHashMap<OrgId, Vec<&Folder>> = FxHashMap::default();
    for f in folders {
        by_org
            .entry(f.org_id)
            .or_insert_with(|| {
                orgs.push(f.org_id);
                Vec::new()
            })
            .push(f);
    }

    let mut lines = Vec::new();
    for org in orgs {
        let header = format!("org {}", org);
        lines.push(if color {
            header.bold().bright_cyan().to_string()
        } else {
            header
        });
        let members = by_org.remove(&org).unwrap_or_default();
        render_org(&members, color, &mut lines);
    }
    lines.join("\n")
}

fn render_org(members: &[&Folder], color: bool, lines: &mut Vec<String>) {
    let by_path: FxHashMap<&str, usize> = members
        .iter()
        .enumerate()
        .map(|(i, f)| (f.path.as_str(), i))
        .collect();

    let mut roots = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); members.len()];
    for (i, f) in members.iter().enumerate() {
        match nearest_ancestor(f, &by_path) {
            Some(parent) if parent != i => children[parent].push(i),
            _ => roots.push(i),
        }
    }

    let count = roots.len();
    for (pos, &root) in roots.iter().enumerate() {
        let label = if members[root].parent_path().is_some() {
            members[root].path.clone()
        } else {
            members[root].name.clone()
        };
        draw(members, &children, root, label, "", pos + 1 == count, color, lines);
    }
}

fn nearest_ancestor(folder: &Folder, by_path: &FxHashMap<&str, usize>) -> Option<usize> {
    let mut current = folder.parent_path();
    while let Some(path) = current {
        if let Some(&idx) = by_path.get(path) {
            return Some(idx);
        }
        current = path.rsplit_once(DELIMITER).map(|(p, _)| p);
    }
    None
}

#[allow(clippy::too_many_arguments)]
fn draw(
    members: &[&Folder],
    children: &[Vec<usize>],
    idx: usize,
    label: String,
    prefix: &str,
    last: bool,
    color: bool,
    lines: &mut Vec<String>,
) {
    let connector = if last { "└── " } else { "├── " };
    let label = if color && !children[idx].is_empty() {
        label.bold().to_string()
    } else {
        label
    };
    lines.push(format!("{}{}{}", prefix, connector, label));

    let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
    let count = children[idx].len();
    for (pos, &child) in children[idx].iter().enumerate() {
        draw(
            members,
            children,
            child,
            members[child].name.clone(),
            &child_prefix,
            pos + 1 == count,
            color,
            lines,
        );
    }
}

/// Error envelope printed on stdout for JSON callers.
pub fn error_envelope(message: &str) -> String {
    serde_json::json!({ "status": "error", "error": message }).to_string()
}

/// Organization ids, as a JSON array or one per line.
pub fn render_org_ids(org_ids: &[OrgId], format: OutputFormat) -> Result<String, OrgFoldersError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(org_ids)?),
        OutputFormat::Flat | OutputFormat::Tree => Ok(org_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
