//! CLI interface for gradeline.
//!
//! Each subcommand is non-interactive: arguments in, structured output out.
//! Card documents are read from a file or stdin, exactly as the card resource
//! returns them; nothing is written back.

mod format;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::{Config, OutputFormat};
use crate::model::Card;
use crate::phases;
use crate::timeline::compute_timeline;

use format::{format_phases, format_timeline};

/// gradeline — follow a card through grading.
#[derive(Debug, Parser)]
#[command(name = "gradeline", version, after_long_help = USAGE_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

const USAGE_HELP: &str = r#"Examples:
  curl -s "$API/cards/1042" | gradeline timeline
  gradeline timeline card.json --json
  gradeline timeline events.json --status psa_grading
  gradeline phases --check

Logging:
  GRADELINE_LOG=debug          filter directives (default: warn)
  GRADELINE_LOG_FORMAT=json    compact (default) or json, on stderr"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a card's phase progress and sorted status history.
    ///
    /// Accepts a card object (`{"status": ..., "statuses": [...]}`) or a
    /// bare array of status events.
    Timeline {
        /// Card JSON file. Reads stdin when omitted or `-`.
        file: Option<PathBuf>,

        /// Override the card's current status.
        #[arg(long)]
        status: Option<String>,

        /// Shorthand for `--format json`.
        #[arg(long, conflicts_with = "format")]
        json: bool,

        /// Output format. Defaults to `default-format` from config.
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the pipeline phases and their statuses.
    Phases {
        /// Verify that no status belongs to more than one phase.
        #[arg(long)]
        check: bool,
    },

    /// Print the display label for a status token.
    Label {
        /// Status token, e.g. `psa_grading`.
        token: String,
    },
}

/// Run the CLI, returning an error message on failure.
pub fn run(cli: Cli, config: &Config) -> Result<(), String> {
    match cli.command {
        Command::Timeline {
            file,
            status,
            json,
            format,
        } => {
            let format = if json {
                OutputFormat::Json
            } else {
                format.unwrap_or(config.default_format)
            };
            cmd_timeline(config, file.as_deref(), status, format)
        }
        Command::Phases { check } => cmd_phases(config, check),
        Command::Label { token } => {
            println!("{}", config.label_map().label_of(&token));
            Ok(())
        }
    }
}

fn cmd_timeline(
    config: &Config,
    file: Option<&Path>,
    status: Option<String>,
    format: OutputFormat,
) -> Result<(), String> {
    let card = match file {
        Some(path) if path != Path::new("-") => Card::read_from(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?,
        _ => Card::read_stdin().map_err(|e| format!("failed to read card from stdin: {e}"))?,
    };

    print!("{}", render_timeline(config, card, status, format)?);
    Ok(())
}

/// Apply the `--status` override and render the card's timeline.
fn render_timeline(
    config: &Config,
    mut card: Card,
    status: Option<String>,
    format: OutputFormat,
) -> Result<String, String> {
    for token in card.unknown_tokens() {
        tracing::warn!(token, "status belongs to no phase; ignored for progress");
    }

    if let Some(status) = status {
        tracing::debug!(from = %card.status, to = %status, "overriding current status");
        card.status = status;
    }

    let labels = config.label_map();
    let view = compute_timeline(&card.statuses, &card.status, &labels);

    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&view)
                .map_err(|e| format!("failed to serialize timeline: {e}"))?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => Ok(format_timeline(&view, card.id.as_deref(), &card.status)),
    }
}

fn cmd_phases(config: &Config, check: bool) -> Result<(), String> {
    if check {
        phases::audit_partition().map_err(|e| format!("phase table is inconsistent: {e}"))?;
        eprintln!(
            "Phase table OK: {} statuses across {} phases",
            phases::vocabulary().count(),
            phases::PHASES.len()
        );
    }

    print!("{}", format_phases(&config.label_map()));
    Ok(())
}
