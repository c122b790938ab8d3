//! Forest loaders backed by local files

mod fs_loader;

pub use fs_loader::{parse_forest, ForestFormat, FsForestLoader};
