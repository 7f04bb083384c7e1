//! CLI module for ddj-toolkit - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for listing the directory
//! and inspecting the filter vocabularies.

pub mod commands;

pub use commands::Cli;
