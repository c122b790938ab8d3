//! File system ForestLoader implementation
//!
//! Reads a forest from a JSON or YAML document: a top-level array of
//! principal nodes in the camelCase wire shape.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::PrincipalNode;
use crate::domain::ports::{ForestLoader, LoadError, LoadScope};
use crate::domain::value_objects::PrincipalKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForestFormat {
    Json,
    Yaml,
}

impl ForestFormat {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Parse a forest document. `path` is only used for error messages.
pub fn parse_forest(
    content: &str,
    format: ForestFormat,
    path: &Path,
) -> Result<Vec<PrincipalNode>, LoadError> {
    let parsed = match format {
        ForestFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        ForestFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
    };
    let forest: Vec<PrincipalNode> = parsed.map_err(|message| LoadError::Parse {
        path: path.to_path_buf(),
        message,
    })?;
    if let Some(kind) = first_unnamed(&forest) {
        return Err(LoadError::Parse {
            path: path.to_path_buf(),
            message: format!("{} principal with an empty name", kind),
        });
    }
    Ok(forest)
}

fn first_unnamed(forest: &[PrincipalNode]) -> Option<PrincipalKind> {
    forest.iter().find_map(|n| {
        if n.id.is_empty() {
            Some(n.kind)
        } else {
            first_unnamed(n.children())
        }
    })
}

pub struct FsForestLoader {
    path: PathBuf,
}

impl FsForestLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ForestLoader for FsForestLoader {
    /// Every call reads the file again and returns a fresh forest. A scope
    /// with an organization keeps only unscoped principals and those of that
    /// organization.
    fn load_forest(&self, scope: &LoadScope) -> Result<Vec<PrincipalNode>, LoadError> {
        let format = ForestFormat::from_path(&self.path)?;
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                LoadError::Unavailable {
                    provider: scope.provider.clone(),
                    message: e.to_string(),
                }
            }
        })?;

        let mut forest = parse_forest(&content, format, &self.path)?;
        if let Some(org) = &scope.organization {
            forest = retain_organization(forest, org);
        }
        debug!(
            path = %self.path.display(),
            %scope,
            roots = forest.len(),
            "loaded forest from file"
        );
        Ok(forest)
    }
}

fn retain_organization(forest: Vec<PrincipalNode>, org: &str) -> Vec<PrincipalNode> {
    forest
        .into_iter()
        .filter(|n| n.id.organization.as_deref().map_or(true, |o| o == org))
        .map(|mut n| {
            if let Some(children) = n.children.take() {
                n.children = Some(retain_organization(children, org));
            }
            n
        })
        .collect()
}
