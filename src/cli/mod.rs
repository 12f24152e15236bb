//! CLI module for Lese.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Lese - Document Reading Research Assistant
///
/// A CLI research assistant that reads your documents and the web.
/// The name "Lese" comes from the Norwegian word for "read."
#[derive(Parser, Debug)]
#[command(name = "lese")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the research agent on a one-shot task
    Ask {
        /// The task for the agent (e.g., "Summarize the key points")
        task: String,

        /// Point the agent at a specific file
        #[arg(short, long)]
        file: Option<String>,

        /// Model to use
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Start an interactive chat session
    Chat {
        /// Model to use
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Extract text from a document and print it
    Read {
        /// Path to the document (PDF, XLSX, DOCX, or plain text)
        path: String,
    },

    /// Search the web and print the results
    Search {
        /// Search query
        query: String,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Check API keys and configuration
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
