//! ptree - browse and pick principals from a forest file
//!
//! Usage: ptree <COMMAND>
//!
//! Commands:
//!   show  Render the visible tree of a forest file
//!   pick  Select principals by name and print the picker result

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use principal_tree::presentation::{Cli, Commands};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = commands::Context::from_cli(&cli)?;

    match cli.command {
        Commands::Show {
            forest,
            filter,
            organization,
            expand_all,
        } => commands::show::cmd_show(&ctx, forest, filter, organization, expand_all),
        Commands::Pick {
            names,
            forest,
            kind,
            existing,
            organization,
            table,
        } => commands::pick::cmd_pick(
            &ctx,
            &names,
            forest,
            kind,
            &existing,
            organization,
            table,
        ),
    }
}

/// Terminal filter: -v count > RUST_LOG env > default "warn". Logs go to
/// stderr so stdout stays clean for rendered output and NDJSON.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
