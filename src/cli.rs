//! CLI struct definitions for the orgfolders command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `lib.rs`.

use crate::core::matching::PathMatch;
use crate::core::output::OutputFormat;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[clap(
    name = "orgfolders",
    version = env!("CARGO_PKG_VERSION"),
    about = "Query and move organization-scoped folder trees encoded as dot-delimited paths"
)]
pub(crate) struct Cli {
    /// Config file (defaults to ./orgfolders.toml when present).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,
    /// JSON folder dataset; overrides `data_file` from the config. Embedded sample otherwise.
    #[clap(long, global = true)]
    pub data: Option<PathBuf>,
    /// Output format.
    #[clap(long, value_enum, global = true, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    /// Path matching strategy; overrides `match_mode` from the config.
    #[clap(long, value_enum, global = true)]
    pub match_mode: Option<PathMatch>,
    /// Reject datasets that repeat a folder name within one organization.
    #[clap(long, global = true)]
    pub strict: bool,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// List the organization ids present in the dataset
    #[clap(name = "orgs")]
    Orgs,

    /// List every folder of one organization
    #[clap(name = "list", visible_alias = "ls")]
    List {
        /// Organization id (defaults to `default_org` from the config).
        #[clap(long)]
        org: Option<Uuid>,
    },

    /// List every folder below the named folder
    #[clap(name = "children", visible_alias = "c")]
    Children {
        /// Folder name.
        name: String,
        /// Organization id (defaults to `default_org` from the config).
        #[clap(long)]
        org: Option<Uuid>,
    },

    /// Move a folder and its subtree under a new parent
    #[clap(name = "move", visible_alias = "mv")]
    Move {
        /// Folder to move.
        source: String,
        /// New parent folder.
        destination: String,
    },
}
