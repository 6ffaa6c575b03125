//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// molgate - dependency gating and step ordering for molecules
#[derive(Parser, Debug)]
#[command(name = "mg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if mg was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report whether dependency types block step progress
    #[command(
        name = "classify",
        long_about = "Report whether dependency types block step progress.\n\n\
            Informational types (parent-child, tracks, related, discovered-from, \
            caused-by, validates, relates-to, supersedes) never block. Every other \
            type blocks, including unknown and empty types. Matching is exact and \
            case-sensitive.",
        after_help = "\
EXAMPLES:
    mg classify blocks tracks
    mg classify --json parent-child needs ''"
    )]
    Classify {
        /// Dependency types to classify
        #[arg(required = true, value_name = "TYPE")]
        types: Vec<String>,
    },

    /// Split dependency edges into blocking and non-blocking
    #[command(
        name = "edges",
        long_about = "Split dependency edges into blocking and non-blocking sets.\n\n\
            Reads a JSON array of dependencies ({\"depends_on_id\": ..., \"type\": ...}) \
            from FILE, or from stdin when FILE is omitted or '-'."
    )]
    Edges {
        /// JSON file of dependencies ('-' for stdin)
        file: Option<PathBuf>,
    },

    /// Print the ordinal encoded in step identifiers
    #[command(
        name = "ordinal",
        long_about = "Print the ordinal encoded in step identifiers.\n\n\
            The ordinal is the decimal number after the last '.'. Identifiers \
            without one print '-' and sort after every numbered step."
    )]
    Ordinal {
        /// Step identifiers
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },

    /// Sort step identifiers by ordinal
    #[command(
        name = "sort",
        long_about = "Sort step identifiers by ordinal.\n\n\
            The sort is stable: identifiers with equal ordinals, including those \
            without a parsable ordinal, keep their input order. Reads one \
            identifier per line from stdin when none are given.",
        after_help = "\
EXAMPLES:
    mg sort gt-mol.3 gt-mol.1 gt-mol.2
    bd list --format=ids | mg sort
    mg sort --check gt-mol.1 gt-mol.2"
    )]
    Sort {
        /// Step identifiers (default: read stdin)
        #[arg(value_name = "ID")]
        ids: Vec<String>,

        /// Exit non-zero if the input is not already sorted
        #[arg(long)]
        check: bool,
    },

    /// List a molecule's steps in order
    #[command(name = "steps")]
    Steps {
        /// JSON file of step issues ('-' for stdin)
        file: Option<PathBuf>,
    },

    /// Show which molecule steps are ready to start
    #[command(
        name = "gate",
        long_about = "Show which molecule steps are ready to start.\n\n\
            A step is ready when every blocking dependency targets a closed issue. \
            Informational dependencies are ignored. Dependencies on issues whose \
            status is unknown keep the step blocked.\n\n\
            Input is a JSON array of step issues, or an object \
            {\"steps\": [...], \"issues\": [...]} where `issues` gives the status \
            of issues outside the molecule.",
        after_help = "\
EXAMPLES:
    mg gate molecule.json
    mg gate --next molecule.json
    bd show gt-mol --children --json | mg gate"
    )]
    Gate {
        /// JSON file of step issues ('-' for stdin)
        file: Option<PathBuf>,

        /// Print only the next ready step
        #[arg(long)]
        next: bool,

        /// Omit closed steps from the report
        #[arg(long)]
        hide_done: bool,
    },

    /// Get, set, or list configuration values
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    # Bash (add to ~/.bashrc)
    mg completion bash >> ~/.bashrc

    # Zsh
    mg completion zsh > ~/.zfunc/_mg"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
        /// Write to the global config instead of the project config
        #[arg(long)]
        global: bool,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion generation.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
