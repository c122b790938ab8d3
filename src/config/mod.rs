//! Configuration for the `ptree` host
//!
//! Layers, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (`PTREE_*`)
//! 3. Project config (`./.ptree.toml`)
//! 4. User config (`<config_dir>/ptree/config.toml`)
//! 5. Built-in defaults
//!
//! Only the first config file found is read; files are not merged.

mod loader;
mod types;

pub use loader::{
    apply_env, load_layered, load_with_warnings, user_config_path, ConfigWarning,
    PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, LoaderConfig, OutputConfig, TableConfig, TreeConfig};
