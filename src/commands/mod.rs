//! Command handlers for the `ptree` binary

pub mod pick;
pub mod show;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use is_terminal::IsTerminal;
use tracing::warn;

use principal_tree::config::{self, Config};
use principal_tree::presentation::{Cli, RenderOptions};
use principal_tree::{
    FsForestLoader, JsonEventSink, LoadScope, PrincipalTree, TracingEventSink, TreeEventSink,
};

/// Settings shared by every command, resolved once from flags, environment
/// and config files
pub struct Context {
    pub config: Config,
    pub render: RenderOptions,
    pub json: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let (config, warnings) = match &cli.config {
            Some(path) => {
                let (config, warnings) = Config::load_with_warnings(path)?;
                (config.with_env_overrides(), warnings)
            }
            None => config::load_layered(&std::env::current_dir()?)?,
        };
        for warning in &warnings {
            warn!("{}", warning);
        }

        let ascii = cli.ascii || config.output.ascii;
        let color = cli
            .color
            .unwrap_or(config.output.color)
            .enabled(std::io::stdout().is_terminal());

        Ok(Self {
            render: RenderOptions::new(!ascii, color && !cli.json),
            json: cli.json,
            config,
        })
    }

    /// Forest file from the command line, else `[loader] forest`
    pub fn forest_path(&self, forest: Option<PathBuf>) -> Result<PathBuf> {
        forest
            .or_else(|| self.config.loader.forest.clone())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "no forest file given\n  → Fix: pass a path or set [loader] forest in .ptree.toml (or PTREE_FOREST)"
                )
            })
    }

    /// Load a tree from `forest`, reporting events on the channel that
    /// matches the output mode
    pub fn load_tree(&self, forest: Option<PathBuf>, organization: Option<String>) -> Result<PrincipalTree> {
        let loader = FsForestLoader::new(self.forest_path(forest)?);
        let mut scope = LoadScope::new("file");
        if let Some(org) = organization {
            scope = scope.with_organization(org);
        }

        let sink: Arc<dyn TreeEventSink> = if self.json {
            Arc::new(JsonEventSink::stdout())
        } else {
            Arc::new(TracingEventSink)
        };
        let mut tree = PrincipalTree::new()
            .with_options(self.config.tree_options())
            .with_sink(sink);
        tree.reload(&loader, &scope)?;
        Ok(tree)
    }
}
