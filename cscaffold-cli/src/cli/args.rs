use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputArg;

/// Instantiate the ctemplate C project skeleton with a real project name
#[derive(Parser, Debug)]
#[command(name = "cscaffold")]
#[command(author, version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename the include directory and substitute the project name into the
    /// skeleton's build, source, and test files
    New {
        /// Project name; prompted for interactively when omitted
        name: Option<String>,

        /// Show what would be done without touching the filesystem
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputArg::Summary)]
        output: OutputArg,

        /// Suppress the summary on success
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print version information
    Version {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputArg::Summary)]
        output: OutputArg,
    },
}
