//! Show command handler

use std::path::PathBuf;

use anyhow::Result;

use principal_tree::presentation::{render_summary, render_tree};

use super::Context;

pub fn cmd_show(
    ctx: &Context,
    forest: Option<PathBuf>,
    filter: Option<String>,
    organization: Option<String>,
    expand_all: bool,
) -> Result<()> {
    let mut tree = ctx.load_tree(forest, organization)?;
    if let Some(term) = filter {
        tree.filter(term);
    }
    if expand_all {
        tree.expand_all();
    }

    if ctx.json {
        let out = serde_json::json!({
            "event": "data",
            "command": "show",
            "term": tree.term(),
            "rows": tree.visible(),
        });
        println!("{}", out);
        return Ok(());
    }

    print!("{}", render_tree(&tree, ctx.render));
    println!("{}", render_summary(&tree));
    Ok(())
}
