//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// nb - plain-text notebook
#[derive(Parser, Debug)]
#[command(name = "nb")]
#[command(author, version, about = "Plain-text notebook with metadata extracted from markdown", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Notebook root (defaults to NOTABENE_DIR or the nearest .notabene)
    #[arg(long, global = true)]
    pub notebook: Option<PathBuf>,

    /// Configuration file (defaults to <notebook>/.notabene/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List notes matching a set of criteria
    List(ListArgs),

    /// Print the content extracted from a note as JSON
    Show {
        /// Note file
        file: PathBuf,
    },

    /// Create a notebook in a directory
    Init {
        /// Directory to initialize (defaults to the current directory)
        dir: Option<PathBuf>,

        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Arguments of `nb list`.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct ListArgs {
    /// Only list notes at or below these paths
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Pretty prints the list using the given format
    #[arg(long, value_name = "TEMPLATE")]
    pub format: Option<String>,

    /// Terms to search for in the notes
    #[arg(short = 'm', long = "match", value_name = "TERMS")]
    pub terms: Option<String>,

    /// Limit the number of results
    #[arg(short = 'n', long, value_name = "MAX")]
    pub limit: Option<usize>,

    /// Show only the notes created on the given date
    #[arg(long, value_name = "DATE")]
    pub created: Option<String>,

    /// Show only the notes created before the given date
    #[arg(long, value_name = "DATE")]
    pub created_before: Option<String>,

    /// Show only the notes created after the given date
    #[arg(long, value_name = "DATE")]
    pub created_after: Option<String>,

    /// Show only the notes modified before the given date
    #[arg(long, value_name = "DATE")]
    pub modified_before: Option<String>,

    /// Show only the notes modified after the given date
    #[arg(long, value_name = "DATE")]
    pub modified_after: Option<String>,
}
