//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Two-tier splitter for huge taxonomic trees: fast-loading core plus long-tail remainder
#[derive(Parser, Debug)]
#[command(name = "rstax")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a monolith into core and remainder files
    Split {
        /// Monolith file to split
        #[arg(value_hint = ValueHint::FilePath)]
        monolith: PathBuf,

        /// Core output file (default: <MONOLITH>.a)
        #[arg(short = 'a', long)]
        core_out: Option<PathBuf>,

        /// Remainder output file (default: <MONOLITH>.b)
        #[arg(short = 'b', long)]
        remainder_out: Option<PathBuf>,

        /// Clade kept in full regardless of depth (falls back to config)
        #[arg(short, long)]
        clade: Option<String>,

        /// Depth cutoff for the core traversal
        #[arg(short, long)]
        max_depth: Option<u32>,

        /// Parent-id token marking the root record
        #[arg(long)]
        sentinel: Option<String>,

        /// Anchor the traversal at this node instead of the tree root
        #[arg(long)]
        root: Option<String>,
    },

    /// Render the root neighborhood as an ASCII tree
    Tree {
        /// Monolith file to read
        #[arg(value_hint = ValueHint::FilePath)]
        monolith: PathBuf,

        /// Depth cutoff
        #[arg(short, long)]
        max_depth: Option<u32>,

        /// Parent-id token marking the root record
        #[arg(long)]
        sentinel: Option<String>,
    },

    /// Show monolith statistics
    Stat {
        /// Monolith file to read
        #[arg(value_hint = ValueHint::FilePath)]
        monolith: PathBuf,

        /// Parent-id token marking the root record
        #[arg(long)]
        sentinel: Option<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config file path
    Path,
}
