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

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised when constructing or parsing UI data shapes
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    /// A date range whose start lies after its end
    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },

    /// Two chart input channels share a name
    #[error("Duplicate chart input channel: {0}")]
    DuplicateChannel(String),

    /// Channel address not in `component/channel` form
    #[error("Invalid channel address: {0}")]
    InvalidChannelAddress(String),

    #[error("Unknown reporting period: {0}")]
    UnknownReportingPeriod(String),

    /// Date pattern uses a field the formatter does not support
    #[error("Unsupported date pattern: {0}")]
    UnsupportedDatePattern(String),

    #[error("Unknown system state: {0}")]
    UnknownSystemState(u8),

    #[error("Unknown grid mode: {0}")]
    UnknownGridMode(u8),

    #[error("Unknown manual on/off value: {0}")]
    UnknownManualOnOff(String),
}
