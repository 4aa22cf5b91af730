//! Calendar field extraction from ordinal arrays.

use crate::frequency::asfreq::{periods_per_day, to_highfreq};
use crate::frequency::calendar;
use crate::frequency::errors::{ConvertError, ConvertResult};
use crate::frequency::registry::{asfreq_fn, WeekendRule};
use crate::frequency::{Anchor, DateField, Frequency};
use chrono::Datelike;
use ndarray::Array1;

/// Decompose every ordinal of `ordinals` at `freq` into the requested
/// calendar field.
///
/// Each element is resolved to its daily ordinal through the registry, a
/// time of day is reconstructed for the sub-daily frequencies, and the
/// calendar collaborator supplies the decomposition. Weekdays are numbered
/// Monday = 0 through Sunday = 6 and weeks are ISO 8601 week numbers.
///
/// # Errors
/// [`ConvertError::Unsupported`] when `freq` has no daily image (the
/// undefined frequency) and [`ConvertError::Date`] when an element resolves
/// to a day the calendar cannot represent.
///
/// # Examples
/// ```rust
/// # use tseries::frequency::{calendar, DateField, Frequency, get_date_field};
/// # use ndarray::Array1;
/// let days = Array1::from(vec![calendar::ordinal_from_ymd(2024, 2, 29).unwrap()]);
/// let quarters = get_date_field(&days, Frequency::Daily, DateField::Quarter).unwrap();
/// assert_eq!(1, quarters[0]);
/// let weekdays = get_date_field(&days, Frequency::Daily, DateField::Weekday).unwrap();
/// assert_eq!(3, weekdays[0]); // a Thursday
/// ```
pub fn get_date_field(
    ordinals: &Array1<i64>,
    freq: Frequency,
    field: DateField,
) -> ConvertResult<Array1<i64>> {
    let to_daily =
        asfreq_fn(freq, Frequency::Daily, WeekendRule::Adjacent).ok_or(ConvertError::Unsupported {
            from: freq,
            to: Frequency::Daily,
        })?;

    let mut out = Array1::zeros(ordinals.len());
    for (ordinal, slot) in ordinals.iter().zip(out.iter_mut()) {
        let daily = to_daily(*ordinal, Anchor::Start);
        let date =
            calendar::date_from_ordinal(daily).ok_or(ConvertError::Date { ordinal: daily })?;
        let secs = seconds_into_day(freq, daily, *ordinal);
        *slot = match field {
            DateField::Year => date.year() as i64,
            DateField::Quarter => (date.month() as i64 - 1) / 3 + 1,
            DateField::Month => date.month() as i64,
            DateField::Day => date.day() as i64,
            DateField::DayOfYear => date.ordinal() as i64,
            DateField::Weekday => date.weekday().num_days_from_monday() as i64,
            DateField::WeekOfYear => date.iso_week().week() as i64,
            DateField::Hour => secs / 3600,
            DateField::Minute => secs / 60 % 60,
            DateField::Second => secs % 60,
        };
    }
    Ok(out)
}

/// Whole seconds since midnight encoded by a sub-daily ordinal, measured
/// against the first tick of its day. Zero for daily and coarser
/// frequencies, whose ordinals carry no time of day.
fn seconds_into_day(freq: Frequency, daily: i64, ordinal: i64) -> i64 {
    match periods_per_day(freq) {
        Some(per_day) => {
            let start_of_day = to_highfreq(daily, Anchor::Start, per_day);
            (ordinal - start_of_day) * (86_400 / per_day)
        }
        None => 0,
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::calendar::ordinal_from_ymd;
    use crate::frequency::HIGH_FREQ_ORIG;

    fn ords(v: Vec<i64>) -> Array1<i64> {
        Array1::from(v)
    }

    #[test]
    fn test_daily_fields() {
        let d = ordinal_from_ymd(2024, 7, 15).unwrap(); // a Monday
        let options: Vec<(DateField, i64)> = vec![
            (DateField::Year, 2024),
            (DateField::Quarter, 3),
            (DateField::Month, 7),
            (DateField::Day, 15),
            (DateField::DayOfYear, 197),
            (DateField::Weekday, 0),
            (DateField::WeekOfYear, 29),
            (DateField::Hour, 0),
            (DateField::Minute, 0),
            (DateField::Second, 0),
        ];
        for option in options.iter() {
            let result = get_date_field(&ords(vec![d]), Frequency::Daily, option.0).unwrap();
            assert_eq!(option.1, result[0], "field {:?}", option.0);
        }
    }

    #[test]
    fn test_fields_from_coarse_frequencies() {
        // coarse ordinals resolve through their period start
        let q3_2024 = (2024 - 1) * 4 + 3;
        let result =
            get_date_field(&ords(vec![q3_2024]), Frequency::Quarterly, DateField::Month).unwrap();
        assert_eq!(7, result[0]);

        let result =
            get_date_field(&ords(vec![2024]), Frequency::Annual, DateField::DayOfYear).unwrap();
        assert_eq!(1, result[0]);
    }

    #[test]
    fn test_subdaily_time_of_day() {
        // hour ordinals: hour h of the origin day is ordinal h + 1
        let hours = ords(vec![1, 2, 24, 25]);
        let result = get_date_field(&hours, Frequency::Hourly, DateField::Hour).unwrap();
        assert_eq!(ords(vec![0, 1, 23, 0]), result);

        // second 3661 of the origin day is 01:01:01
        let seconds = ords(vec![3662]);
        assert_eq!(
            1,
            get_date_field(&seconds, Frequency::Secondly, DateField::Hour).unwrap()[0]
        );
        assert_eq!(
            1,
            get_date_field(&seconds, Frequency::Secondly, DateField::Minute).unwrap()[0]
        );
        assert_eq!(
            1,
            get_date_field(&seconds, Frequency::Secondly, DateField::Second).unwrap()[0]
        );

        // minute ordinals reconstruct whole minutes
        let minutes = ords(vec![61]);
        assert_eq!(
            1,
            get_date_field(&minutes, Frequency::Minutely, DateField::Hour).unwrap()[0]
        );
        assert_eq!(
            0,
            get_date_field(&minutes, Frequency::Minutely, DateField::Minute).unwrap()[0]
        );
    }

    #[test]
    fn test_subdaily_date_fields() {
        // the origin day is 1970-01-01, a Thursday
        let first_hour = ords(vec![1]);
        assert_eq!(
            1970,
            get_date_field(&first_hour, Frequency::Hourly, DateField::Year).unwrap()[0]
        );
        assert_eq!(
            3,
            get_date_field(&first_hour, Frequency::Hourly, DateField::Weekday).unwrap()[0]
        );
        // hour 25 is on the second day
        assert_eq!(
            2,
            get_date_field(&ords(vec![25]), Frequency::Hourly, DateField::Day).unwrap()[0]
        );
        // HIGH_FREQ_ORIG anchors the reconstruction
        let day_two = HIGH_FREQ_ORIG + 1;
        assert_eq!(
            ordinal_from_ymd(1970, 1, 2).unwrap(),
            day_two
        );
    }

    #[test]
    fn test_business_ordinals_decompose() {
        // business ordinal of Friday 2024-01-05 decomposes as that date
        let friday = ordinal_from_ymd(2024, 1, 5).unwrap();
        let b = crate::frequency::asfreq_map(
            &ords(vec![friday]),
            Frequency::Daily,
            Frequency::BusinessDaily,
            Anchor::Start,
        );
        let result = get_date_field(&b, Frequency::BusinessDaily, DateField::Day).unwrap();
        assert_eq!(5, result[0]);
        let result = get_date_field(&b, Frequency::BusinessDaily, DateField::Weekday).unwrap();
        assert_eq!(4, result[0]);
    }

    #[test]
    fn test_undefined_frequency_is_unsupported() {
        assert_eq!(
            Err(ConvertError::Unsupported {
                from: Frequency::Undefined,
                to: Frequency::Daily
            }),
            get_date_field(&ords(vec![1]), Frequency::Undefined, DateField::Year)
        );
    }
}
