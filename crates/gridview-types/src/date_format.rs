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

//! Locale-dependent date rendering.
//!
//! Patterns follow the Unicode/date-fns field letters the translation catalog
//! ships (`dd.MM.yyyy`, `MM/dd/yyyy`). Only numeric day, month and year
//! fields are supported; text between single quotes is copied verbatim and
//! `''` stands for one quote.

use chrono::NaiveDate;
use chrono::format::{Item, Numeric, Pad};
use tracing::warn;

use crate::error::TypesError;

/// Renders a calendar date with a locale-specific pattern
pub trait DateFormatter {
    fn format(&self, date: NaiveDate, pattern: &str) -> String;
}

impl<T: DateFormatter + ?Sized> DateFormatter for &T {
    fn format(&self, date: NaiveDate, pattern: &str) -> String {
        (**self).format(date, pattern)
    }
}

/// Parsed date pattern, held as chrono formatting items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    items: Vec<Item<'static>>,
}

fn literal_item(text: String) -> Item<'static> {
    Item::OwnedLiteral(text.into_boxed_str())
}

impl DatePattern {
    /// Parse a pattern such as `dd.MM.yyyy`
    ///
    /// # Errors
    ///
    /// Returns `TypesError::UnsupportedDatePattern` for field letters other than
    /// `y`, `M` (1-2) and `d` (1-2), or an unterminated quote.
    pub fn parse(pattern: &str) -> Result<Self, TypesError> {
        let unsupported = || TypesError::UnsupportedDatePattern(pattern.to_owned());
        let mut items = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    literal.push('\'');
                    continue;
                }
                loop {
                    match chars.next() {
                        Some('\'') if chars.peek() == Some(&'\'') => {
                            chars.next();
                            literal.push('\'');
                        }
                        Some('\'') => break,
                        Some(other) => literal.push(other),
                        None => return Err(unsupported()),
                    }
                }
                continue;
            }

            if !c.is_ascii_alphabetic() {
                literal.push(c);
                continue;
            }

            let mut run = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                run += 1;
            }

            // `yyyy` and longer map to chrono's four-digit `%Y`
            let field = match (c, run) {
                ('y', 1) => Item::Numeric(Numeric::Year, Pad::None),
                ('y', 2) => Item::Numeric(Numeric::YearMod100, Pad::Zero),
                ('y', _) => Item::Numeric(Numeric::Year, Pad::Zero),
                ('M', 1) => Item::Numeric(Numeric::Month, Pad::None),
                ('M', 2) => Item::Numeric(Numeric::Month, Pad::Zero),
                ('d', 1) => Item::Numeric(Numeric::Day, Pad::None),
                ('d', 2) => Item::Numeric(Numeric::Day, Pad::Zero),
                _ => return Err(unsupported()),
            };
            if !literal.is_empty() {
                items.push(literal_item(std::mem::take(&mut literal)));
            }
            items.push(field);
        }

        if !literal.is_empty() {
            items.push(literal_item(literal));
        }
        Ok(Self { items })
    }

    #[must_use]
    pub fn render(&self, date: NaiveDate) -> String {
        date.format_with_items(self.items.iter()).to_string()
    }
}

/// [`DateFormatter`] backed by [`DatePattern`].
///
/// Patterns it cannot parse are logged and rendered as ISO `yyyy-MM-dd`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternDateFormatter;

impl DateFormatter for PatternDateFormatter {
    fn format(&self, date: NaiveDate, pattern: &str) -> String {
        match DatePattern::parse(pattern) {
            Ok(parsed) => parsed.render(date),
            Err(e) => {
                warn!(pattern, "Rendering date as ISO: {e}");
                date.format("%Y-%m-%d").to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_european_pattern() {
        let formatted = PatternDateFormatter.format(date(2024, 3, 5), "dd.MM.yyyy");
        assert_eq!(formatted, "05.03.2024");
    }

    #[test]
    fn test_us_pattern() {
        let formatted = PatternDateFormatter.format(date(2024, 12, 31), "MM/dd/yyyy");
        assert_eq!(formatted, "12/31/2024");
    }

    #[test]
    fn test_unpadded_and_short_year() {
        let pattern = DatePattern::parse("d.M.yy").unwrap();
        assert_eq!(pattern.render(date(2007, 1, 9)), "9.1.07");
    }

    #[test]
    fn test_year_padding() {
        let early = date(987, 6, 1);
        assert_eq!(DatePattern::parse("y").unwrap().render(early), "987");
        assert_eq!(DatePattern::parse("yyyy").unwrap().render(early), "0987");
        assert_eq!(DatePattern::parse("yy").unwrap().render(early), "87");
        assert_eq!(DatePattern::parse("d/M/y").unwrap().render(early), "1/6/987");
    }

    #[test]
    fn test_adjacent_fields_without_separator() {
        let pattern = DatePattern::parse("yyyyMMdd").unwrap();
        assert_eq!(pattern.render(date(2024, 3, 5)), "20240305");
    }

    #[test]
    fn test_quoted_literals() {
        let pattern = DatePattern::parse("'day' d 'of' M, yyyy ''").unwrap();
        assert_eq!(pattern.render(date(2024, 2, 29)), "day 29 of 2, 2024 '");

        let pattern = DatePattern::parse("'it''s' yyyy").unwrap();
        assert_eq!(pattern.render(date(2024, 1, 1)), "it's 2024");
    }

    #[test]
    fn test_unsupported_fields_rejected() {
        assert!(DatePattern::parse("EEEE, dd.MM.yyyy").is_err());
        assert!(DatePattern::parse("MMMM yyyy").is_err());
        assert!(DatePattern::parse("'unterminated").is_err());
    }

    #[test]
    fn test_unsupported_pattern_falls_back_to_iso() {
        let formatted = PatternDateFormatter.format(date(2024, 7, 4), "MMMM d");
        assert_eq!(formatted, "2024-07-04");
    }
}
