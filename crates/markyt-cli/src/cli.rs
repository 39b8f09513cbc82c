//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Markyt CLI - lead personalization administration
#[derive(Parser, Debug)]
#[command(name = "markyt")]
#[command(about = "Markyt landing-slug and personalization tool", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Derive a lead's landing slug and URL
    Slug {
        /// Lead record (JSON file)
        #[arg(long)]
        lead: PathBuf,

        /// Compose the URL on this subdomain instead of the configured client
        #[arg(long)]
        subdomain: Option<String>,
    },

    /// Personalize a message template for a lead
    Render {
        /// Template file; its text is the message body
        #[arg(long)]
        template: PathBuf,

        /// Subject line template
        #[arg(long)]
        subject: Option<String>,

        /// Lead record (JSON file)
        #[arg(long)]
        lead: PathBuf,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// List the tokens a template mentions
    Tokens {
        /// Template file to scan
        #[arg(long)]
        template: PathBuf,

        /// Lead record (JSON file); adds a resolution report
        #[arg(long)]
        lead: Option<PathBuf>,
    },

    /// Render an outreach sequence for one lead or a CSV batch
    Sequence {
        /// Sequence definition (TOML file)
        #[arg(long)]
        file: PathBuf,

        /// Lead record (JSON file)
        #[arg(long)]
        lead: Option<PathBuf>,

        /// Lead batch (CSV file)
        #[arg(long)]
        leads: Option<PathBuf>,

        /// Sequence start time (RFC 3339) for schedule stamping
        #[arg(long)]
        start: Option<String>,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    Config {
        /// Configuration action to perform
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions under `markyt config`.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved configuration file path
    Path,

    /// Get a configuration value by dotted key (e.g. `client.subdomain`)
    Get {
        /// Dotted key to read
        key: String,
    },

    /// Set a configuration value by dotted key
    Set {
        /// Dotted key to write
        key: String,

        /// New value
        value: String,
    },

    /// Create a configuration file with default values
    Init {
        /// Write to this file instead of the default location
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the resolved configuration as TOML
    Show,
}
