// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of GridView.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

mod args;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use gridview_types::{DateRange, PatternDateFormatter, PeriodLabelFormatter, UiConfig};
use tracing::debug;

use crate::args::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => UiConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => UiConfig::default(),
    };
    if let Some(language) = cli.language {
        config.language = language;
    }
    debug!(?config, "Resolved UI config");

    let catalog = config
        .catalog()
        .context("Failed to load translations")?;
    let range = DateRange::new(cli.from, cli.to.unwrap_or(cli.from))?;
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    let formatter = PeriodLabelFormatter::new(&catalog, &PatternDateFormatter);
    println!("{}", formatter.format_label(&range, cli.mode, today));
    Ok(())
}
