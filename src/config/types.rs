//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::{PermissionTable, TreeOptions};
use crate::domain::value_objects::PrincipalKind;
use crate::error::TreeResult;

use super::loader::{self, ConfigWarning};

/// `[tree]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    #[serde(default = "default_true")]
    pub expand_roots: bool,

    #[serde(default = "all_kinds")]
    pub accepted_kinds: Vec<PrincipalKind>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            expand_roots: true,
            accepted_kinds: all_kinds(),
        }
    }
}

/// `[table]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "table_kinds")]
    pub accepted_kinds: Vec<PrincipalKind>,

    /// Initial action filter; empty shows every entry
    #[serde(default)]
    pub actions: Vec<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            accepted_kinds: table_kinds(),
            actions: Vec::new(),
        }
    }
}

/// `[output]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub ascii: bool,

    #[serde(default)]
    pub color: ColorMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    /// Resolve against whether stdout is a terminal
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            Self::Auto => is_tty,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// `[loader]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Forest file used when the command line names none
    #[serde(default)]
    pub forest: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,

    #[serde(default)]
    pub table: TableConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub loader: LoaderConfig,
}

impl Config {
    pub fn load(path: &Path) -> TreeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply `PTREE_*` environment overrides
    pub fn with_env_overrides(self) -> Self {
        loader::apply_env(self, |key| std::env::var(key).ok())
    }

    pub fn tree_options(&self) -> TreeOptions {
        TreeOptions {
            expand_roots: self.tree.expand_roots,
            accepted_kinds: self.tree.accepted_kinds.clone(),
        }
    }

    pub fn permission_table(&self) -> PermissionTable {
        PermissionTable::new(self.table.accepted_kinds.clone())
            .with_action_filter(self.table.actions.iter().cloned())
    }
}

fn default_true() -> bool {
    true
}

fn all_kinds() -> Vec<PrincipalKind> {
    PrincipalKind::ALL.to_vec()
}

fn table_kinds() -> Vec<PrincipalKind> {
    vec![PrincipalKind::User, PrincipalKind::Group]
}
