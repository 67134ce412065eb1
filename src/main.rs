//! zmksync - Sync build-facing keymap outputs from canonical keymap.json
//!
//! Renders each layer of the canonical layer description into the exact
//! bindings text the build keymap expects, and patches the matching
//! regions in place, leaving everything else in the file untouched.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use zmksync::config::SyncPaths;
use zmksync::regen::{ExistingFragment, RakeRegenerator};
use zmksync::sync::{self, SyncReport};

/// Sync build-facing keymap outputs from canonical keymap.json
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Write updates to the build keymap (default is dry-run)
    #[arg(long)]
    write: bool,

    /// Skip regenerating keymap.dtsi before syncing
    #[arg(long)]
    skip_rake: bool,

    /// Path to the keymap repository root
    #[arg(long, value_name = "PATH", default_value = ".")]
    root: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        eprintln!("zmksync: {error:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let paths = SyncPaths::for_root(&cli.root);

    let report = if cli.skip_rake {
        sync::run_sync(&paths, &ExistingFragment::new(&paths), cli.write)?
    } else {
        sync::run_sync(&paths, &RakeRegenerator::new(&paths), cli.write)?
    };

    print_summary(&paths, cli.write, &report);
    Ok(())
}

fn print_summary(paths: &SyncPaths, write: bool, report: &SyncReport) {
    let target = paths.build_keymap_display();

    if write {
        if report.changed {
            println!("Updated {target}.");
        } else {
            println!("{target} already in sync.");
        }
    } else {
        if report.changed {
            println!("Would update {target}.");
        } else {
            println!("{target} already in sync.");
        }
        println!("Run with --write to apply changes.");
    }

    if !report.changed_layers.is_empty() {
        println!("Layer blocks changed: {}", report.changed_layers.join(", "));
    }
}
