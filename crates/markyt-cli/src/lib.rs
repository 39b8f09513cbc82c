//! # markyt-cli
//!
//! Admin CLI for the Markyt personalization toolkit.
//!
//! This crate provides command-line tools for working with leads and
//! message templates:
//! - Landing slug and URL derivation (`markyt slug`)
//! - Personalization previews (`markyt render`, `markyt tokens`)
//! - Sequence rendering for one lead or a CSV batch (`markyt sequence`)
//! - Configuration management (`markyt config`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use error::{Error, Result};

/// Initializes the tracing subscriber for CLI output.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects debug
/// level output.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Runs a parsed command line to completion.
pub fn run(args: cli::Args) -> Result<()> {
    let config_path = args.config.as_deref();
    match args.command {
        cli::Command::Slug { lead, subdomain } => {
            let config = config::MarkytConfig::load(config_path)?;
            commands::cmd_slug(&config, &lead, subdomain.as_deref())
        }
        cli::Command::Render {
            template,
            subject,
            lead,
            json,
        } => {
            let config = config::MarkytConfig::load(config_path)?;
            commands::cmd_render(&config, &template, subject.as_deref(), &lead, json)
        }
        cli::Command::Tokens { template, lead } => {
            let config = config::MarkytConfig::load(config_path)?;
            commands::cmd_tokens(&config, &template, lead.as_deref())
        }
        cli::Command::Sequence {
            file,
            lead,
            leads,
            start,
            json,
        } => {
            let config = config::MarkytConfig::load(config_path)?;
            commands::cmd_sequence(
                &config,
                &file,
                lead.as_deref(),
                leads.as_deref(),
                start.as_deref(),
                json,
            )
        }
        cli::Command::Config { action } => commands::handle_config_command(config_path, action),
    }
}
