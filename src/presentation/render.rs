//! Text rendering of the visible tree
//!
//! Row layout: selection marker, indentation, expand arrow, kind icon,
//! label, read-only marker.

use crossterm::style::Stylize;

use crate::application::{PermissionEntry, PrincipalTree};
use crate::domain::entities::{FlatNode, PrincipalNode};

use super::theme::{colors, IconSet};

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub unicode: bool,
    pub color: bool,
}

impl RenderOptions {
    pub fn new(unicode: bool, color: bool) -> Self {
        Self { unicode, color }
    }
}

/// Render a single visible row
pub fn render_row(node: &FlatNode, selected: bool, options: RenderOptions) -> String {
    let icons = IconSet::new(options.unicode);
    let marker = if selected { icons.selected } else { icons.unselected };
    let indent = "  ".repeat(node.level);
    let arrow = match (node.expandable, node.expanded) {
        (true, true) => icons.expanded,
        (true, false) => icons.collapsed,
        (false, _) => icons.leaf,
    };
    let icon = node.kind().icon(options.unicode);
    let suffix = if node.read_only {
        format!(" {}", icons.read_only)
    } else {
        String::new()
    };

    let label = if !options.color {
        node.label.clone()
    } else if selected {
        node.label.as_str().with(colors::SELECTED).bold().to_string()
    } else if node.read_only {
        node.label.as_str().with(colors::DIM).to_string()
    } else if node.is_root {
        node.label.as_str().with(colors::FOLDER).to_string()
    } else {
        node.label.clone()
    };

    format!("{} {}{} {} {}{}", marker, indent, arrow, icon, label, suffix)
}

/// Render every visible row of `tree`, one per line
pub fn render_tree(tree: &PrincipalTree, options: RenderOptions) -> String {
    let selected = tree.selection();
    let mut out = String::new();
    for node in tree.visible() {
        let is_selected = selected.iter().any(|s| s.key == node.key);
        out.push_str(&render_row(node, is_selected, options));
        out.push('\n');
    }
    out
}

/// One-line summary under the tree
pub fn render_summary(tree: &PrincipalTree) -> String {
    let total = tree.flat_nodes().len();
    let mut line = format!(
        "{} principal{}, {} visible, {} selected",
        total,
        if total == 1 { "" } else { "s" },
        tree.visible_len(),
        tree.selection().len()
    );
    if !tree.term().is_empty() {
        line.push_str(&format!(", filter '{}'", tree.term()));
    }
    line
}

/// Render a picker result as a flat list
pub fn render_picked(nodes: &[PrincipalNode], options: RenderOptions) -> String {
    let mut out = String::new();
    for node in nodes {
        let label = node.display_name();
        let label = if options.color {
            label.with(colors::MATCH).to_string()
        } else {
            label.to_string()
        };
        out.push_str(&format!(
            "{} {} ({})\n",
            node.kind.icon(options.unicode),
            label,
            node.id
        ));
    }
    out
}

/// Permission table rows: the picked line followed by the granted actions
pub fn render_entries(entries: &[&PermissionEntry], options: RenderOptions) -> String {
    let mut out = String::new();
    for entry in entries {
        let line = render_picked(std::slice::from_ref(&entry.node), options);
        let line = line.trim_end();
        if entry.actions.is_empty() {
            out.push_str(line);
        } else {
            let actions: Vec<&str> = entry.actions.iter().map(String::as_str).collect();
            out.push_str(&format!("{} [{}]", line, actions.join(", ")));
        }
        out.push('\n');
    }
    out
}
