//! Pick command handler
//!
//! Selects principals by name the way an admin would click them (first name
//! plain, the rest with ctrl) and prints the picker result: read-only nodes
//! and folders replaced by their writable members. With `--table` the result
//! is handed to a permission table configured from `[table]`.

use std::path::PathBuf;

use anyhow::Result;

use principal_tree::presentation::{render_entries, render_picked};
use principal_tree::{Modifiers, PrincipalId, PrincipalKind, PrincipalNode, SelectionTransfer};

use super::Context;

pub fn cmd_pick(
    ctx: &Context,
    names: &[String],
    forest: Option<PathBuf>,
    kind: Option<PrincipalKind>,
    existing: &[String],
    organization: Option<String>,
    table: bool,
) -> Result<()> {
    let mut tree = ctx.load_tree(forest, organization)?;
    tree.expand_all();

    for name in names {
        let key = tree
            .visible()
            .into_iter()
            .find(|n| {
                (n.key.id.name == *name || n.label == *name)
                    && kind.map_or(true, |k| n.kind() == k)
            })
            .map(|n| n.key.clone())
            .ok_or_else(|| anyhow::anyhow!("no principal named '{}' in the forest", name))?;

        if tree.selection().iter().any(|n| n.key == key) {
            continue;
        }
        let modifiers = if tree.selection().is_empty() {
            Modifiers::NONE
        } else {
            Modifiers::CTRL
        };
        tree.select(&key, modifiers);
    }

    let existing: Vec<PrincipalId> = existing.iter().map(|s| parse_identity(s)).collect();
    let picked = tree.picker_selection(&existing);

    if table {
        return print_table(ctx, &picked);
    }

    if ctx.json {
        let out = serde_json::json!({
            "event": "data",
            "command": "pick",
            "principals": picked,
        });
        println!("{}", out);
        return Ok(());
    }

    if picked.is_empty() {
        println!("Nothing to pick.");
    } else {
        print!("{}", render_picked(&picked, ctx.render));
    }
    Ok(())
}

fn print_table(ctx: &Context, picked: &[PrincipalNode]) -> Result<()> {
    let mut permissions = ctx.config.permission_table();
    let report = permissions.receive_selection(picked);
    let entries = permissions.visible_entries();

    if ctx.json {
        let rows: Vec<_> = entries
            .iter()
            .map(|e| serde_json::json!({ "principal": e.node, "actions": e.actions }))
            .collect();
        let out = serde_json::json!({
            "event": "data",
            "command": "pick",
            "entries": rows,
            "added": report.added,
            "rejected": report.rejected,
        });
        println!("{}", out);
        return Ok(());
    }

    if entries.is_empty() {
        println!("Nothing to pick.");
    } else {
        print!("{}", render_entries(&entries, ctx.render));
    }
    if report.rejected > 0 {
        println!("{} skipped: kind not accepted by the table", report.rejected);
    }
    Ok(())
}

/// `name` or `name@organization`
fn parse_identity(value: &str) -> PrincipalId {
    match value.split_once('@') {
        Some((name, org)) if !org.is_empty() => PrincipalId::scoped(name, org),
        _ => PrincipalId::new(value),
    }
}
