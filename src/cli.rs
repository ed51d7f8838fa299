//! CLI Argument Parsing
//!
//! Global flags (--root, --config, --json, --color, --verbose,
//! --ignore-lock-field) are inherited by all subcommands. With no subcommand
//! the full audit runs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// auditpack - fail-closed forensic audit and evidence bundler
#[derive(Parser, Debug)]
#[command(name = "auditpack")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'auditpack' without a subcommand for the full audit.")]
pub struct Cli {
    /// Audit root holding the declared files and lock documents
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Config file (defaults to <root>/auditpack.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Top-level lock field excluded from the sync comparison (repeatable)
    #[arg(long = "ignore-lock-field", value_name = "NAME", global = true)]
    pub ignore_lock_fields: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the full audit: inventory, hashes, lock sync, manifest, bundle
    Audit,

    /// Check that every required file exists (exits 1 if any is missing)
    Inventory,

    /// Recompute digests against the primary lock (exits 1 on mismatch)
    Verify {
        /// Lock document to verify against, relative to the root
        #[arg(long)]
        lock: Option<String>,
    },

    /// Compare the primary and mirror lock documents (exits 1 on drift)
    LockSync,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Audit => "audit",
            Commands::Inventory => "inventory",
            Commands::Verify { .. } => "verify",
            Commands::LockSync => "lock-sync",
        }
    }
}
