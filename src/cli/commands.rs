//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: filter and rank the directory
//! - categories: show the category vocabulary
//! - platforms: show the platform catalog

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ddj-toolkit - Browse the data-journalism tool directory
#[derive(Parser, Debug)]
#[command(name = "ddj-toolkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read tools.yml/platforms.yml/categories.yml from this directory
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Fetch the documents from this base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tools matching the filters
    List {
        /// Only this category (repeatable)
        #[arg(short = 'k', long = "category")]
        categories: Vec<String>,

        /// Only tools available on this platform (repeatable)
        #[arg(short = 'p', long = "platform")]
        platforms: Vec<String>,

        /// Only open-source tools
        #[arg(short, long)]
        open_source: bool,

        /// Free-text search
        #[arg(short, long)]
        search: Option<String>,

        /// Print JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Show the category filter options
    Categories,

    /// Show the platform filter options
    Platforms,
}
