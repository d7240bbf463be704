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

//! Reporting periods and their human-readable labels.

use chrono::{Datelike, Local, NaiveDate};
use gridview_i18n::TranslationResolver;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::date_format::DateFormatter;
use crate::error::TypesError;

pub const TOTAL_KEY: &str = "Edge.History.TOTAL";
pub const TODAY_KEY: &str = "Edge.History.today";
pub const YESTERDAY_KEY: &str = "Edge.History.yesterday";
pub const SELECTED_DAY_KEY: &str = "Edge.History.selectedDay";
pub const DATE_FORMAT_KEY: &str = "General.dateFormat";
pub const PERIOD_FROM_TO_KEY: &str = "General.periodFromTo";

/// Weekday names indexed by days from Sunday
pub const WEEKDAY_KEYS: [&str; 7] = [
    "General.Week.sunday",
    "General.Week.monday",
    "General.Week.tuesday",
    "General.Week.wednesday",
    "General.Week.thursday",
    "General.Week.friday",
    "General.Week.saturday",
];

/// Month names indexed by zero-based month
pub const MONTH_KEYS: [&str; 12] = [
    "General.Month.january",
    "General.Month.february",
    "General.Month.march",
    "General.Month.april",
    "General.Month.may",
    "General.Month.june",
    "General.Month.july",
    "General.Month.august",
    "General.Month.september",
    "General.Month.october",
    "General.Month.november",
    "General.Month.december",
];

/// How a selected date range is interpreted and labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingPeriod {
    #[default]
    Day,
    Week,
    Month,
    Year,
    Total,
    Custom,
}

impl ReportingPeriod {
    /// Periods offered as presets in the picker, i.e. everything but `Custom`
    pub const PRESETS: [ReportingPeriod; 5] = [
        ReportingPeriod::Day,
        ReportingPeriod::Week,
        ReportingPeriod::Month,
        ReportingPeriod::Year,
        ReportingPeriod::Total,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::Total => "total",
            Self::Custom => "custom",
        }
    }

    #[must_use]
    pub fn is_preset(&self) -> bool {
        !matches!(self, Self::Custom)
    }

    /// Translation key of the picker caption
    #[must_use]
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Day => "Edge.History.day",
            Self::Week => "Edge.History.week",
            Self::Month => "Edge.History.month",
            Self::Year => "Edge.History.year",
            Self::Total => TOTAL_KEY,
            Self::Custom => "Edge.History.custom",
        }
    }
}

impl std::fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReportingPeriod {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            "total" => Ok(Self::Total),
            "custom" => Ok(Self::Custom),
            _ => Err(TypesError::UnknownReportingPeriod(s.to_owned())),
        }
    }
}

#[derive(Deserialize)]
struct RawDateRange {
    from: NaiveDate,
    to: NaiveDate,
}

/// Inclusive range of calendar days, `from <= to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = TypesError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.from, raw.to)
    }
}

impl DateRange {
    /// # Errors
    ///
    /// Returns `TypesError::InvalidDateRange` if `from` is after `to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, TypesError> {
        if from > to {
            return Err(TypesError::InvalidDateRange { from, to });
        }
        Ok(Self { from, to })
    }

    #[must_use]
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            from: date,
            to: date,
        }
    }

    #[must_use]
    pub fn from(&self) -> NaiveDate {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> NaiveDate {
        self.to
    }

    #[must_use]
    pub fn is_single_day(&self) -> bool {
        self.from == self.to
    }

    /// First to last day of one calendar month
    #[must_use]
    pub fn is_full_month(&self) -> bool {
        self.from.year() == self.to.year()
            && self.from.month() == self.to.month()
            && self.from.day() == 1
            && is_last_day_of_month(self.to)
    }

    /// January 1st to December 31st of one year
    #[must_use]
    pub fn is_full_year(&self) -> bool {
        self.from.year() == self.to.year()
            && self.from.ordinal() == 1
            && self.to.month() == 12
            && self.to.day() == 31
    }
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.succ_opt()
        .is_none_or(|next| next.month() != date.month())
}

/// Range the history view currently shows together with its period mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPeriod {
    pub range: DateRange,
    pub mode: ReportingPeriod,
}

impl Default for HistoryPeriod {
    fn default() -> Self {
        Self::today(Local::now().date_naive())
    }
}

impl HistoryPeriod {
    #[must_use]
    pub fn new(range: DateRange, mode: ReportingPeriod) -> Self {
        Self { range, mode }
    }

    /// Single-day selection of `today`
    #[must_use]
    pub fn today(today: NaiveDate) -> Self {
        Self::new(DateRange::single_day(today), ReportingPeriod::Day)
    }

    #[must_use]
    pub fn label<T, D>(&self, formatter: &PeriodLabelFormatter<'_, T, D>, today: NaiveDate) -> String
    where
        T: TranslationResolver + ?Sized,
        D: DateFormatter + ?Sized,
    {
        formatter.format_label(&self.range, self.mode, today)
    }
}

/// Turns a [`DateRange`] into a localized label such as "Today, 05.03.2024",
/// "March 2024", "2024" or "from 05.01.2024 to 20.01.2024".
pub struct PeriodLabelFormatter<'a, T: ?Sized, D: ?Sized> {
    translate: &'a T,
    dates: &'a D,
}

impl<T: ?Sized, D: ?Sized> std::fmt::Debug for PeriodLabelFormatter<'_, T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PeriodLabelFormatter").finish_non_exhaustive()
    }
}

impl<'a, T, D> PeriodLabelFormatter<'a, T, D>
where
    T: TranslationResolver + ?Sized,
    D: DateFormatter + ?Sized,
{
    #[must_use]
    pub fn new(translate: &'a T, dates: &'a D) -> Self {
        Self { translate, dates }
    }

    /// Label for `range` viewed in `mode`, with `today` as the reference day
    /// for the "today" and "yesterday" captions.
    #[must_use]
    pub fn format_label(&self, range: &DateRange, mode: ReportingPeriod, today: NaiveDate) -> String {
        if mode == ReportingPeriod::Total {
            trace!("Total period label");
            return self.translate.text(TOTAL_KEY);
        }

        if range.is_single_day() {
            let day = range.from();
            if day == today {
                trace!(%day, "Today label");
                return format!("{}, {}", self.translate.text(TODAY_KEY), self.format_date(day));
            }
            if today.pred_opt() == Some(day) {
                trace!(%day, "Yesterday label");
                return format!(
                    "{}, {}",
                    self.translate.text(YESTERDAY_KEY),
                    self.format_date(day)
                );
            }
            trace!(%day, "Single day label");
            let formatted = self.format_date(day);
            return format!(
                "{}, {}",
                self.weekday_name(day),
                self.translate
                    .resolve(SELECTED_DAY_KEY, &[("value", formatted.as_str())])
            );
        }

        if range.is_full_month() {
            trace!(from = %range.from(), "Month label");
            return format!("{} {:04}", self.month_name(range.from()), range.from().year());
        }

        if range.is_full_year() {
            trace!(from = %range.from(), "Year label");
            return format!("{:04}", range.from().year());
        }

        trace!(from = %range.from(), to = %range.to(), "Custom range label");
        let from = self.format_date(range.from());
        let to = self.format_date(range.to());
        self.translate.resolve(
            PERIOD_FROM_TO_KEY,
            &[("value1", from.as_str()), ("value2", to.as_str())],
        )
    }

    /// [`Self::format_label`] against the local calendar day
    #[must_use]
    pub fn format_label_now(&self, range: &DateRange, mode: ReportingPeriod) -> String {
        self.format_label(range, mode, Local::now().date_naive())
    }

    fn format_date(&self, date: NaiveDate) -> String {
        let pattern = self.translate.text(DATE_FORMAT_KEY);
        self.dates.format(date, &pattern)
    }

    fn weekday_name(&self, date: NaiveDate) -> String {
        self.translate
            .text(WEEKDAY_KEYS[date.weekday().num_days_from_sunday() as usize])
    }

    fn month_name(&self, date: NaiveDate) -> String {
        self.translate.text(MONTH_KEYS[date.month0() as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_invalid_range_rejected() {
        let err = DateRange::new(date(2024, 2, 1), date(2024, 1, 31)).unwrap_err();
        assert_eq!(
            err,
            TypesError::InvalidDateRange {
                from: date(2024, 2, 1),
                to: date(2024, 1, 31)
            }
        );
    }

    #[test]
    fn test_invalid_range_rejected_on_deserialize() {
        let json = r#"{"from":"2024-03-10","to":"2024-03-01"}"#;
        assert!(serde_json::from_str::<DateRange>(json).is_err());

        let json = r#"{"from":"2024-03-01","to":"2024-03-10"}"#;
        let range: DateRange = serde_json::from_str(json).unwrap();
        assert_eq!(range.to(), date(2024, 3, 10));
    }

    #[test]
    fn test_full_month_detection() {
        assert!(DateRange::new(date(2024, 2, 1), date(2024, 2, 29)).unwrap().is_full_month());
        assert!(!DateRange::new(date(2023, 2, 1), date(2023, 2, 27)).unwrap().is_full_month());
        assert!(DateRange::new(date(2023, 2, 1), date(2023, 2, 28)).unwrap().is_full_month());
        assert!(DateRange::new(date(2024, 12, 1), date(2024, 12, 31)).unwrap().is_full_month());
        assert!(!DateRange::new(date(2024, 1, 1), date(2024, 2, 29)).unwrap().is_full_month());
        assert!(!DateRange::new(date(2024, 1, 2), date(2024, 1, 31)).unwrap().is_full_month());
    }

    #[test]
    fn test_full_year_detection() {
        assert!(DateRange::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap().is_full_year());
        assert!(!DateRange::new(date(2023, 1, 1), date(2024, 12, 31)).unwrap().is_full_year());
        assert!(!DateRange::new(date(2024, 1, 1), date(2024, 12, 30)).unwrap().is_full_year());
    }

    #[test]
    fn test_reporting_period_strings() {
        for period in ReportingPeriod::PRESETS {
            assert!(period.is_preset());
            assert_eq!(period.as_str().parse::<ReportingPeriod>().unwrap(), period);
        }
        assert!(!ReportingPeriod::Custom.is_preset());
        assert_eq!(
            serde_json::to_string(&ReportingPeriod::Total).unwrap(),
            "\"total\""
        );
        assert!("fortnight".parse::<ReportingPeriod>().is_err());
        assert_eq!(ReportingPeriod::Total.label_key(), TOTAL_KEY);
    }

    #[test]
    fn test_lookup_tables_cover_calendar() {
        // 2024-03-03 is a Sunday
        let sunday = date(2024, 3, 3);
        for offset in 0..7 {
            let day = sunday + chrono::Days::new(offset);
            let index = day.weekday().num_days_from_sunday() as usize;
            assert_eq!(u64::try_from(index).unwrap(), offset);
        }
        assert_eq!(MONTH_KEYS[date(2024, 12, 1).month0() as usize], "General.Month.december");
    }

    #[test]
    fn test_history_period_defaults_to_single_day() {
        let period = HistoryPeriod::today(date(2024, 5, 6));
        assert!(period.range.is_single_day());
        assert_eq!(period.mode, ReportingPeriod::Day);
    }
}
