//! orgfolders: organization-scoped folder trees encoded as dot-delimited paths.
//!
//! Every folder carries a `path` such as `alpha.bravo.charlie` naming its ancestors from the
//! root down to itself. The tree is never materialised; queries and moves work directly on
//! the path strings.
//!
//! # Operations
//!
//! - **Organization filter**: [`FolderStore::folders_by_org`]
//! - **Descendant query**: [`FolderStore::child_folders`]
//! - **Move**: [`FolderStore::move_folder`], which rewrites the paths of the moved subtree
//!   and returns the whole post-move state of the affected organization
//!
//! # Examples
//!
//! ```bash
//! # Folders of the default organization, drawn as a tree
//! orgfolders list --format tree
//!
//! # Everything below `alpha`
//! orgfolders children alpha
//!
//! # Move `bravo` under `delta`
//! orgfolders move bravo delta --data folders.json
//! ```
//!
//! # Crate Structure
//!
//! - [`core`](crate::core): folder model, store, matching rules, data source, config and rendering

pub mod cli;
pub mod core;

pub use crate::core::error::{FolderError, OrgFoldersError};
pub use crate::core::folder::{Folder, OrgId};
pub use crate::core::matching::PathMatch;
pub use crate::core::store::FolderStore;

use cli::{Cli, Command};
use crate::core::{config, output, sample};

use clap::Parser;
use std::io::IsTerminal;
use tracing::debug;

pub fn run() -> Result<(), OrgFoldersError> {
    let cli = Cli::parse();
    let format = cli.format;
    match execute(cli) {
        Ok(rendered) => {
            println!("{}", rendered);
            Ok(())
        }
        Err(e) => {
            if format == output::OutputFormat::Json {
                println!("{}", output::error_envelope(&e.to_string()));
            }
            Err(e)
        }
    }
}

fn execute(cli: Cli) -> Result<String, OrgFoldersError> {
    let current_dir = std::env::current_dir()?;
    let config = config::load_config(cli.config.as_deref(), &current_dir)?;
    config::init_tracing(&config.logging);

    let store = open_store(&cli, &config)?;
    debug!(
        folders = store.len(),
        mode = %store.match_mode(),
        "store ready"
    );

    let color = std::io::stdout().is_terminal();
    match cli.command {
        Command::Orgs => output::render_org_ids(&store.org_ids(), cli.format),
        Command::List { org } => {
            let folders = store.folders_by_org(org.unwrap_or(config.default_org));
            output::render(&folders, cli.format, color)
        }
        Command::Children { name, org } => {
            let folders = store.child_folders(org.unwrap_or(config.default_org), &name)?;
            output::render(&folders, cli.format, color)
        }
        Command::Move {
            source,
            destination,
        } => {
            let folders = store.move_folder(&source, &destination)?;
            output::render(&folders, cli.format, color)
        }
    }
}

fn open_store(cli: &Cli, config: &config::Config) -> Result<FolderStore, OrgFoldersError> {
    let folders = match cli.data.as_ref().or(config.data_file.as_ref()) {
        Some(path) => sample::load_folders(path)?,
        None => sample::sample_folders()?,
    };
    let store = if cli.strict || config.strict {
        FolderStore::try_new_unique(folders)?
    } else {
        FolderStore::new(folders)
    };
    Ok(store.with_match_mode(cli.match_mode.unwrap_or(config.match_mode)))
}
