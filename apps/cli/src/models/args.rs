//! # CLI Argument Definitions
//!
//! Command-line structure of the `szflags` binary, declared with `clap` derive.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "szflags")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect, decode and validate entity-resolution flags")]
pub struct Cli {
    /// Settings file (TOML, JSON or YAML); `szflags.*` in the working directory if present
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of the configured level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Combine flags by name and print the resulting mask
    Mask {
        /// Flag names, e.g. SZ_ENTITY_INCLUDE_ENTITY_NAME
        #[arg(required = true, value_name = "FLAG")]
        flags: Vec<String>,
    },
    /// Explain a raw mask (decimal, 0x hex or 0b binary)
    Decode {
        mask: String,
        /// Render the mask in the vocabulary of this usage group
        #[arg(short, long, value_name = "GROUP")]
        group: Option<String>,
    },
    /// List flags in declaration order with their values and groups
    List {
        /// Only flags belonging to this usage group
        #[arg(short, long, value_name = "GROUP")]
        group: Option<String>,
        /// Include aggregate flags
        #[arg(short, long)]
        aggregates: bool,
    },
    /// List usage groups with their base-flag count and combined mask
    Groups {},
    /// Cross-check the legacy constants, the catalog and the metadata
    Validate {
        /// Metadata file to check instead of the configured or bundled one
        #[arg(short, long, value_name = "PATH")]
        metadata: Option<PathBuf>,
    },
}
