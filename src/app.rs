// src/app.rs
use anyhow::{Context, Result};
use clap::Parser;
use kanon_core::{ConfigService, run_with_config};

use crate::args::Args;

pub fn run() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = ConfigService::build(args.into()).context("invalid configuration")?;
    let summary = run_with_config(&config).context("anonymization failed")?;

    // Status line goes to stderr so piped delimited output stays clean.
    if !config.metric_only && config.format.separator().is_some() {
        eprintln!(
            "kanon v{} · k={} · groups={} · metric={}",
            kanon_core::VERSION,
            summary.k,
            summary.groups,
            summary.metric
        );
    }
    Ok(())
}
