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

//! CLI argument definitions using clap.

use chrono::NaiveDate;
use clap::Parser;
use gridview_i18n::Language;
use gridview_types::ReportingPeriod;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "gridview-label")]
#[command(author, version, about = "Print the dashboard label of a history date range")]
#[command(
    long_about = "Print the localized label the history view shows for a date range.\n\
    \nExamples:\n  \
    gridview-label --from 2024-03-01 --to 2024-03-31          # March 2024\n  \
    gridview-label --from 2024-01-05 --to 2024-01-20 -l de    # von 05.01.2024 bis 20.01.2024\n  \
    gridview-label --from 2024-03-14 --today 2024-03-15       # Yesterday, 03/14/2024"
)]
pub struct Cli {
    /// First day of the range (YYYY-MM-DD)
    #[arg(long)]
    pub from: NaiveDate,

    /// Last day of the range (YYYY-MM-DD), defaults to --from
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Reporting period mode (day, week, month, year, total, custom)
    #[arg(long, default_value_t = ReportingPeriod::Day)]
    pub mode: ReportingPeriod,

    /// Language code, overrides the config file (en, de)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Reference day for "today"/"yesterday", defaults to the local date
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// TOML file with `language` and `date_format` settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
