//! Calendar difference between two dates

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::record::{FieldErrorKind, FormatError};

static STAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+) yrs ([0-9]+) months ([0-9]+) days$").unwrap());

/// Time spent between two dates, as years, months and days.
///
/// Whole months are counted from the start date. When the end day falls
/// before the start day a month is borrowed and the days are counted across
/// the month preceding the end date's month. If the start day does not exist
/// in that month the count starts from its last day, so adding the result
/// back to the start date always lands on the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    years: u32,
    months: u32,
    days: u32,
}

impl Stay {
    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Difference from `started` to `ended`, `None` if `ended` comes first
    pub fn between(started: NaiveDate, ended: NaiveDate) -> Option<Self> {
        if ended < started {
            return None;
        }

        let mut total_months = (ended.year() - started.year()) * 12
            + ended.month() as i32
            - started.month() as i32;

        if ended.day() < started.day() {
            total_months -= 1;
        }

        let total_months = u32::try_from(total_months).ok()?;
        let anchor = started.checked_add_months(Months::new(total_months))?;
        let days = u32::try_from((ended - anchor).num_days()).ok()?;

        Some(Self {
            years: total_months / 12,
            months: total_months % 12,
            days,
        })
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Add this stay to `date`: whole months first (clamped to the end of
    /// the month), then days.
    pub fn add_to(&self, date: NaiveDate) -> Option<NaiveDate> {
        date.checked_add_months(Months::new(self.years * 12 + self.months))?
            .checked_add_days(Days::new(u64::from(self.days)))
    }
}

impl fmt::Display for Stay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} yrs {} months {} days", self.years, self.months, self.days)
    }
}

impl FromStr for Stay {
    type Err = FieldErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = STAY_PATTERN.captures(s.trim()).ok_or(FormatError::Duration)?;
        let part = |i: usize| caps[i].parse::<u32>().map_err(|_| FormatError::Duration);

        Ok(Self::new(part(1)?, part(2)?, part(3)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::date::parse_date;
    use proptest::prelude::*;

    fn stay(started: &str, ended: &str) -> Stay {
        Stay::between(parse_date(started).unwrap(), parse_date(ended).unwrap()).unwrap()
    }

    #[test]
    fn test_one_year() {
        assert_eq!(stay("01-01-2000", "01-01-2001").to_string(), "1 yrs 0 months 0 days");
    }

    #[test]
    fn test_borrow_across_short_february() {
        assert_eq!(stay("31-01-2000", "01-03-2000").to_string(), "0 yrs 1 months 1 days");
    }

    #[test]
    fn test_borrow_days_from_previous_month() {
        // one whole month to 15-02, then 24 days through a 29-day February
        assert_eq!(stay("15-01-2000", "10-03-2000"), Stay::new(0, 1, 24));
    }

    #[test]
    fn test_borrow_year() {
        assert_eq!(stay("20-11-1999", "05-02-2000"), Stay::new(0, 2, 16));
        assert_eq!(stay("24-01-2000", "24-01-3000"), Stay::new(1000, 0, 0));
    }

    #[test]
    fn test_same_day() {
        assert_eq!(stay("24-01-2000", "24-01-2000"), Stay::new(0, 0, 0));
    }

    #[test]
    fn test_ended_before_started() {
        let started = parse_date("02-01-2000").unwrap();
        let ended = parse_date("01-01-2000").unwrap();
        assert_eq!(Stay::between(started, ended), None);
    }

    #[test]
    fn test_parse_display_form() {
        let parsed: Stay = "1000 yrs 0 months 0 days".parse().unwrap();
        assert_eq!(parsed, Stay::new(1000, 0, 0));
        assert!("1000 years".parse::<Stay>().is_err());
    }

    proptest! {
        #[test]
        fn prop_stay_composes_back(start in 0i64..150_000, span in 0i64..40_000) {
            let base = NaiveDate::from_ymd_opt(1700, 1, 1).unwrap();
            let started = base + chrono::Duration::days(start);
            let ended = started + chrono::Duration::days(span);

            let stay = Stay::between(started, ended).unwrap();
            prop_assert!(stay.months() < 12);
            prop_assert_eq!(stay.add_to(started), Some(ended));
        }
    }
}
