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

pub mod common;
pub mod config;
pub mod date_format;
pub mod error;
pub mod history;
pub mod notification;
pub mod period;
pub mod summary;

// Re-export common types for convenience
pub use common::{Backend, ChannelAddresses, KeyValue, ManualOnOff};
pub use config::{ConfigError, UiConfig};
pub use date_format::{DateFormatter, DatePattern, PatternDateFormatter};
pub use error::TypesError;
pub use history::{
    ChannelAddress, ChannelData, HistoryChartData, HistoryDisplayValues, HistoryInputChannel,
    TooltipSettings, ValueConverter, YAxisTitle,
};
pub use notification::{Notification, NotificationType};
pub use period::{DateRange, HistoryPeriod, PeriodLabelFormatter, ReportingPeriod};
pub use summary::{GridMode, Summary, SystemState};
