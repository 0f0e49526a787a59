use anyhow::Context;
use clap::Parser;
use cscaffold_core::{version_operation, OutputFormatter};
use std::io::{self, IsTerminal};
use std::process;

mod cli;
mod scaffold;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && io::stderr().is_terminal();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }

    let result = match cli.command {
        Commands::New {
            name,
            dry_run,
            output,
            quiet,
        } => scaffold::handle_new(name, dry_run, output.into(), quiet, use_color),

        Commands::Version { output } => {
            let version = version_operation("cscaffold", env!("CARGO_PKG_VERSION"));
            println!("{}", version.format(output.into()));
            Ok(true)
        },
    };

    match result {
        // Full success
        Ok(true) => {},
        // Best-effort run finished with at least one failed step
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        },
    }
}
