//! ForestLoader port
//!
//! Retrieves the principal forest for a provider/tenant scope. The tree core
//! never knows whether the data comes from REST, a cache or a file.

use std::path::PathBuf;

use crate::domain::entities::PrincipalNode;

/// Identifies which provider (and, in multi-tenant mode, which organization)
/// a forest is loaded for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LoadScope {
    pub provider: String,
    pub organization: Option<String>,
}

impl LoadScope {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            organization: None,
        }
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }
}

impl std::fmt::Display for LoadScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.organization {
            Some(org) => write!(f, "{}/{}", self.provider, org),
            None => write!(f, "{}", self.provider),
        }
    }
}

pub trait ForestLoader: Send + Sync {
    fn load_forest(&self, scope: &LoadScope) -> Result<Vec<PrincipalNode>, LoadError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("forest source not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to parse forest in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("unsupported forest format '{extension}' for {path}\n  → Fix: use a .json, .yaml or .yml file")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("forest provider '{provider}' unavailable: {message}")]
    Unavailable { provider: String, message: String },
}
