//! Defines the command-line interface structure using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prompt-pad", version, about = "Local prompt notes manager")]
pub struct Cli {
    /// Path to the store file (defaults to ~/.prompt-pad/prompts.json)
    #[arg(long, global = true, env = "PROMPT_PAD_STORE")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// List all stored prompts, most recently updated first
    List,
    /// Create a new prompt
    New,
    /// Show a specific prompt by ID
    Show { id: String },
    /// Edit an existing prompt
    Edit { id: String },
    /// Delete a prompt by ID
    Delete { id: String },
    /// Search prompts by title
    Search { query: String },
    /// Copy a prompt's plain-text content to the clipboard
    Copy { id: String },
}
