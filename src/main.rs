//! Binary entrypoint for the daily gallery.
//!
//! Delegates all logic to the library crate; no local modules here.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{ArgAction, Parser};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "daily-gallery", about = "Deterministic daily photo selection")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,

    /// Override the number of photos selected
    #[arg(long, value_name = "N")]
    count: Option<usize>,

    /// Preview the selection for another UTC day (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    date: Option<NaiveDate>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("daily_gallery={}", level).parse().unwrap());
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    // Use the library crate only.
    let cfg = daily_gallery::config::Configuration::from_yaml_file(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?
        .validated()
        .context("validating configuration")?;

    let now: DateTime<Utc> = match cli.date {
        Some(day) => day.and_time(NaiveTime::MIN).and_utc(),
        None => Utc::now(),
    };
    let count = cli.count.unwrap_or(cfg.gallery_count);

    let selection = daily_gallery::daily_selection_at(
        &cfg.photo_library_path,
        &cfg.public_photo_base,
        count,
        now,
    );
    info!(
        seed = daily_gallery::select::daily_seed(now),
        selected = selection.len(),
        "computed daily selection"
    );

    if selection.is_empty() {
        info!("no photos yet; the gallery renders its empty state");
    }
    for photo in &selection {
        println!("{}", photo.url);
    }

    let remaining = daily_gallery::select::time_until_rotation(now);
    info!(
        hours = remaining.num_hours(),
        minutes = remaining.num_minutes() % 60,
        seconds = remaining.num_seconds() % 60,
        "next rotation at UTC midnight"
    );
    Ok(())
}
