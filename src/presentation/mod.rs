//! Presentation Layer
//!
//! - `cli` - argument parsing (clap)
//! - `render` - text rendering of visible rows
//! - `theme` - colors and icons

pub mod cli;
pub mod render;
pub mod theme;

pub use cli::{Cli, Commands};
pub use render::{
    render_entries, render_picked, render_row, render_summary, render_tree, RenderOptions,
};
