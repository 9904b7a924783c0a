mod card;
mod cli;
mod config;
mod labels;
mod model;
mod phases;
mod timeline;

use std::{env, io, process};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::Cli;
use config::Config;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(cli, &config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for JSON output.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("GRADELINE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let format = env::var("GRADELINE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    if format == "json" {
        registry
            .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().compact().with_writer(io::stderr))
            .init();
    }
}
