//! CLI Argument Parsing
//!
//! Global flags (`-v`, `--ascii`, `--color`, `--json`, `--config`) are
//! inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ColorMode;
use crate::domain::value_objects::PrincipalKind;

/// ptree - browse and pick principals from a forest file
#[derive(Parser, Debug)]
#[command(name = "ptree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Use ASCII icons
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorMode>,

    /// Read configuration from this file instead of the layered lookup
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the visible tree of a forest file
    Show {
        /// Forest file (.json, .yaml, .yml); falls back to [loader] forest
        forest: Option<PathBuf>,

        /// Only show principals matching this term (and their ancestors)
        #[arg(short, long)]
        filter: Option<String>,

        /// Restrict to one organization
        #[arg(long)]
        organization: Option<String>,

        /// Expand every node
        #[arg(long)]
        expand_all: bool,
    },

    /// Select principals by name and print what a picker would hand over
    Pick {
        /// Names to select, in order
        #[arg(required = true)]
        names: Vec<String>,

        /// Forest file (.json, .yaml, .yml); falls back to [loader] forest
        #[arg(long)]
        forest: Option<PathBuf>,

        /// Only match principals of this kind
        #[arg(short, long, value_enum)]
        kind: Option<PrincipalKind>,

        /// Identities already granted; they are left out of the result
        #[arg(long, value_delimiter = ',')]
        existing: Vec<String>,

        /// Restrict to one organization
        #[arg(long)]
        organization: Option<String>,

        /// Hand the result to a permission table set up from [table] and
        /// print its entries
        #[arg(long)]
        table: bool,
    },
}
