//! Boundary to the calendar collaborator.
//!
//! All year/month/day decomposition is delegated to [`chrono`]; the
//! conversion engine itself only ever manipulates integer ordinals. The day
//! numbering is chrono's `num_days_from_ce` convention, day 1 being
//! 1st January of year 1 in the proleptic Gregorian calendar.

use chrono::{Datelike, NaiveDate};

/// Resolve a daily ordinal to a calendar date.
///
/// Ordinals below 1 precede the calendar and have no date.
pub fn date_from_ordinal(ordinal: i64) -> Option<NaiveDate> {
    if ordinal < 1 {
        return None;
    }
    i32::try_from(ordinal)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

/// Resolve a calendar date to its daily ordinal.
///
/// Returns `None` when `(year, month, day)` does not name a real date.
pub fn ordinal_from_ymd(year: i64, month: i64, day: u32) -> Option<i64> {
    let year = i32::try_from(year).ok()?;
    let month = u32::try_from(month).ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.num_days_from_ce() as i64)
}

/// Day of week of a daily ordinal, numbered Monday = 0 through Sunday = 6.
pub(crate) fn weekday_from_ordinal(ordinal: i64) -> Option<i64> {
    date_from_ordinal(ordinal).map(|d| d.weekday().num_days_from_monday() as i64)
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_round_trip() {
        // 1970-01-01 is the sub-daily origin used throughout the engine.
        let ord = ordinal_from_ymd(1970, 1, 1).unwrap();
        assert_eq!(719_163, ord);
        let date = date_from_ordinal(ord).unwrap();
        assert_eq!((1970, 1, 1), (date.year(), date.month(), date.day()));
    }

    #[test]
    fn test_day_one() {
        let date = date_from_ordinal(1).unwrap();
        assert_eq!((1, 1, 1), (date.year(), date.month(), date.day()));
        assert_eq!(None, date_from_ordinal(0));
        assert_eq!(None, date_from_ordinal(-5));
    }

    #[test]
    fn test_weekday() {
        // day 1 of the proleptic calendar is a Monday
        assert_eq!(Some(0), weekday_from_ordinal(1));
        assert_eq!(Some(5), weekday_from_ordinal(6));
        assert_eq!(Some(6), weekday_from_ordinal(7));
        // 2024-01-01 was a Monday
        assert_eq!(Some(0), weekday_from_ordinal(ordinal_from_ymd(2024, 1, 1).unwrap()));
    }

    #[test]
    fn test_invalid_ymd() {
        assert_eq!(None, ordinal_from_ymd(2023, 2, 29));
        assert_eq!(None, ordinal_from_ymd(2023, 13, 1));
        assert_eq!(None, ordinal_from_ymd(2023, 0, 1));
    }
}
