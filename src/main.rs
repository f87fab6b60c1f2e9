//! Binary entrypoint for the brick carousel.
//!
//! Loads carousels from YAML and replays navigation requests against one of
//! them, printing each outcome as a JSON line.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use brick_carousel::config::Configuration;
use brick_carousel::{Carousels, NavRequest};
use clap::{ArgAction, Parser};
use serde_json::json;
use tracing::{Level, info};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
#[command(name = "brick", about = "Slide navigation engine for content carousels")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE", default_value = "carousel.yaml")]
    config: PathBuf,

    /// Carousel id to drive (defaults to the first configured)
    #[arg(long, value_name = "ID")]
    carousel: Option<String>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Requests to replay in order: next, prev, goto:N
    #[arg(value_name = "REQUEST")]
    requests: Vec<NavRequest>,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env().add_directive(
        format!("brick_carousel={level}")
            .parse::<Directive>()
            .context("building log filter")?,
    );
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let cfg = Configuration::from_yaml_file(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?
        .validated()
        .context("validating configuration")?;
    let mut carousels = Carousels::from_config(&cfg)?;
    info!(
        count = carousels.len(),
        bump = %humantime::format_duration(cfg.bump_duration),
        "carousels initialized"
    );

    let id = match cli.carousel {
        Some(id) => id,
        None => cfg
            .carousels
            .first()
            .map(|c| c.id.clone())
            .ok_or_else(|| anyhow!("no carousels configured"))?,
    };
    let engine = carousels
        .get(&id)
        .ok_or_else(|| anyhow!("unknown carousel: {id}"))?;
    println!(
        "{}",
        json!({
            "carousel": id,
            "dots": engine.dot_count(),
            "index": engine.current_index(),
            "offset": engine.offset(),
        })
    );

    for request in cli.requests {
        let outcome = carousels.dispatch(&id, request)?;
        println!("{}", serde_json::to_string(&outcome)?);
    }
    Ok(())
}
