//! Conversion function registry and period height resolver.
//!
//! The registry is a fixed lookup over every ordered frequency pair,
//! returning the pure conversion function of [`asfreq`](crate::frequency::asfreq)
//! implementing that pair, or `None` where no conversion is defined (any
//! pair involving [`Frequency::Undefined`], and same-frequency pairs other
//! than the Daily identity).

use crate::frequency::asfreq::*;
use crate::frequency::{Anchor, Frequency};
use serde::{Deserialize, Serialize};

/// A pure per-element conversion between two frequencies' ordinal schemes.
pub type AsfreqFn = fn(i64, Anchor) -> i64;

/// Weekend handling for conversions landing on the business frequency.
///
/// The distinction only exists for the Daily/Hourly/Minutely/Secondly to
/// BusinessDaily entries; every other pair ignores it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekendRule {
    /// Weekend dates roll to the adjacent business day. Used by scalar and
    /// element-wise conversion, and for endpoint derivation.
    Adjacent,
    /// Weekend dates have no image and yield the sentinel. Used when bulk
    /// converting arrays, so one observation never lands on two business
    /// days.
    Unmapped,
}

/// Return the conversion function for the ordered pair `(from, to)`, or
/// `None` when the pair is undefined.
pub fn asfreq_fn(from: Frequency, to: Frequency, weekends: WeekendRule) -> Option<AsfreqFn> {
    use Frequency::*;
    match (from, to) {
        (Annual, Quarterly) => Some(annual_to_quarterly),
        (Annual, Monthly) => Some(annual_to_monthly),
        (Annual, Weekly) => Some(annual_to_weekly),
        (Annual, BusinessDaily) => Some(annual_to_business),
        (Annual, Daily) => Some(annual_to_daily),
        (Annual, Hourly) => Some(annual_to_hourly),
        (Annual, Minutely) => Some(annual_to_minutely),
        (Annual, Secondly) => Some(annual_to_secondly),

        (Quarterly, Annual) => Some(quarterly_to_annual),
        (Quarterly, Monthly) => Some(quarterly_to_monthly),
        (Quarterly, Weekly) => Some(quarterly_to_weekly),
        (Quarterly, BusinessDaily) => Some(quarterly_to_business),
        (Quarterly, Daily) => Some(quarterly_to_daily),
        (Quarterly, Hourly) => Some(quarterly_to_hourly),
        (Quarterly, Minutely) => Some(quarterly_to_minutely),
        (Quarterly, Secondly) => Some(quarterly_to_secondly),

        (Monthly, Annual) => Some(monthly_to_annual),
        (Monthly, Quarterly) => Some(monthly_to_quarterly),
        (Monthly, Weekly) => Some(monthly_to_weekly),
        (Monthly, BusinessDaily) => Some(monthly_to_business),
        (Monthly, Daily) => Some(monthly_to_daily),
        (Monthly, Hourly) => Some(monthly_to_hourly),
        (Monthly, Minutely) => Some(monthly_to_minutely),
        (Monthly, Secondly) => Some(monthly_to_secondly),

        (Weekly, Annual) => Some(weekly_to_annual),
        (Weekly, Quarterly) => Some(weekly_to_quarterly),
        (Weekly, Monthly) => Some(weekly_to_monthly),
        (Weekly, BusinessDaily) => Some(weekly_to_business),
        (Weekly, Daily) => Some(weekly_to_daily),
        (Weekly, Hourly) => Some(weekly_to_hourly),
        (Weekly, Minutely) => Some(weekly_to_minutely),
        (Weekly, Secondly) => Some(weekly_to_secondly),

        (BusinessDaily, Annual) => Some(business_to_annual),
        (BusinessDaily, Quarterly) => Some(business_to_quarterly),
        (BusinessDaily, Monthly) => Some(business_to_monthly),
        (BusinessDaily, Weekly) => Some(business_to_weekly),
        (BusinessDaily, Daily) => Some(business_to_daily),
        (BusinessDaily, Hourly) => Some(business_to_hourly),
        (BusinessDaily, Minutely) => Some(business_to_minutely),
        (BusinessDaily, Secondly) => Some(business_to_secondly),

        (Daily, Annual) => Some(daily_to_annual),
        (Daily, Quarterly) => Some(daily_to_quarterly),
        (Daily, Monthly) => Some(daily_to_monthly),
        (Daily, Weekly) => Some(daily_to_weekly),
        (Daily, BusinessDaily) => Some(match weekends {
            WeekendRule::Adjacent => daily_to_business,
            WeekendRule::Unmapped => daily_to_business_exact,
        }),
        (Daily, Daily) => Some(daily_to_daily),
        (Daily, Hourly) => Some(daily_to_hourly),
        (Daily, Minutely) => Some(daily_to_minutely),
        (Daily, Secondly) => Some(daily_to_secondly),

        (Hourly, Annual) => Some(hourly_to_annual),
        (Hourly, Quarterly) => Some(hourly_to_quarterly),
        (Hourly, Monthly) => Some(hourly_to_monthly),
        (Hourly, Weekly) => Some(hourly_to_weekly),
        (Hourly, BusinessDaily) => Some(match weekends {
            WeekendRule::Adjacent => hourly_to_business,
            WeekendRule::Unmapped => hourly_to_business_exact,
        }),
        (Hourly, Daily) => Some(hourly_to_daily),
        (Hourly, Minutely) => Some(hourly_to_minutely),
        (Hourly, Secondly) => Some(hourly_to_secondly),

        (Minutely, Annual) => Some(minutely_to_annual),
        (Minutely, Quarterly) => Some(minutely_to_quarterly),
        (Minutely, Monthly) => Some(minutely_to_monthly),
        (Minutely, Weekly) => Some(minutely_to_weekly),
        (Minutely, BusinessDaily) => Some(match weekends {
            WeekendRule::Adjacent => minutely_to_business,
            WeekendRule::Unmapped => minutely_to_business_exact,
        }),
        (Minutely, Daily) => Some(minutely_to_daily),
        (Minutely, Hourly) => Some(minutely_to_hourly),
        (Minutely, Secondly) => Some(minutely_to_secondly),

        (Secondly, Annual) => Some(secondly_to_annual),
        (Secondly, Quarterly) => Some(secondly_to_quarterly),
        (Secondly, Monthly) => Some(secondly_to_monthly),
        (Secondly, Weekly) => Some(secondly_to_weekly),
        (Secondly, BusinessDaily) => Some(match weekends {
            WeekendRule::Adjacent => secondly_to_business,
            WeekendRule::Unmapped => secondly_to_business_exact,
        }),
        (Secondly, Daily) => Some(secondly_to_daily),
        (Secondly, Hourly) => Some(secondly_to_hourly),
        (Secondly, Minutely) => Some(secondly_to_minutely),

        _ => None,
    }
}

const MAX_DAYS_PER_YEAR: usize = 366;
const MAX_DAYS_PER_QUARTER: usize = 92;
const MAX_DAYS_PER_MONTH: usize = 31;
const MAX_BUS_DAYS_PER_YEAR: usize = 262;
const MAX_BUS_DAYS_PER_QUARTER: usize = 66;
const MAX_BUS_DAYS_PER_MONTH: usize = 23;

/// Maximum number of `from` sub-periods that fit inside one `to` period.
///
/// Sizes the inner dimension of a 2-D resample grid; the values are
/// conservative calendar maxima. Pairs with no nesting (same frequency or
/// up-direction) resolve to 1 and keep the converted series 1-D.
pub fn height(from: Frequency, to: Frequency) -> usize {
    use Frequency::*;
    match (from, to) {
        (Quarterly, Annual) => 4,

        (Monthly, Annual) => 12,
        (Monthly, Quarterly) => 3,

        (Weekly, Annual) => 53,
        (Weekly, Quarterly) => 13,
        (Weekly, Monthly) => 4,

        (BusinessDaily, Annual) => MAX_BUS_DAYS_PER_YEAR,
        (BusinessDaily, Quarterly) => MAX_BUS_DAYS_PER_QUARTER,
        (BusinessDaily, Monthly) => MAX_BUS_DAYS_PER_MONTH,
        (BusinessDaily, Weekly) => 5,

        (Daily, Annual) => MAX_DAYS_PER_YEAR,
        (Daily, Quarterly) => MAX_DAYS_PER_QUARTER,
        (Daily, Monthly) => MAX_DAYS_PER_MONTH,
        (Daily, Weekly) => 7,

        (Hourly, Annual) => 24 * MAX_DAYS_PER_YEAR,
        (Hourly, Quarterly) => 24 * MAX_DAYS_PER_QUARTER,
        (Hourly, Monthly) => 24 * MAX_DAYS_PER_MONTH,
        (Hourly, Weekly) => 24 * 7,
        (Hourly, Daily) => 24,
        (Hourly, BusinessDaily) => 24,

        (Minutely, Annual) => 24 * 60 * MAX_DAYS_PER_YEAR,
        (Minutely, Quarterly) => 24 * 60 * MAX_DAYS_PER_QUARTER,
        (Minutely, Monthly) => 24 * 60 * MAX_DAYS_PER_MONTH,
        (Minutely, Weekly) => 24 * 60 * 7,
        (Minutely, Daily) => 24 * 60,
        (Minutely, BusinessDaily) => 24 * 60,
        (Minutely, Hourly) => 60,

        (Secondly, Annual) => 24 * 60 * 60 * MAX_DAYS_PER_YEAR,
        (Secondly, Quarterly) => 24 * 60 * 60 * MAX_DAYS_PER_QUARTER,
        (Secondly, Monthly) => 24 * 60 * 60 * MAX_DAYS_PER_MONTH,
        (Secondly, Weekly) => 24 * 60 * 60 * 7,
        (Secondly, Daily) => 24 * 60 * 60,
        (Secondly, BusinessDaily) => 24 * 60 * 60,
        (Secondly, Hourly) => 60 * 60,
        (Secondly, Minutely) => 60,

        _ => 1,
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Frequency; 10] = [
        Frequency::Annual,
        Frequency::Quarterly,
        Frequency::Monthly,
        Frequency::Weekly,
        Frequency::BusinessDaily,
        Frequency::Daily,
        Frequency::Hourly,
        Frequency::Minutely,
        Frequency::Secondly,
        Frequency::Undefined,
    ];

    #[test]
    fn test_registry_coverage() {
        // every ordered pair of real frequencies resolves, except
        // same-frequency pairs other than the Daily identity
        for from in ALL.iter() {
            for to in ALL.iter() {
                let f = asfreq_fn(*from, *to, WeekendRule::Adjacent);
                let expected = *from != Frequency::Undefined
                    && *to != Frequency::Undefined
                    && (from != to || *from == Frequency::Daily);
                assert_eq!(expected, f.is_some(), "pair {:?} -> {:?}", from, to);
            }
        }
    }

    #[test]
    fn test_registry_weekend_rule_sensitivity() {
        // only the four sub-weekly -> business entries switch on the rule
        let sensitive = [
            Frequency::Daily,
            Frequency::Hourly,
            Frequency::Minutely,
            Frequency::Secondly,
        ];
        for from in sensitive.iter() {
            let rolled = asfreq_fn(*from, Frequency::BusinessDaily, WeekendRule::Adjacent).unwrap();
            let strict = asfreq_fn(*from, Frequency::BusinessDaily, WeekendRule::Unmapped).unwrap();
            assert_ne!(rolled as usize, strict as usize);
        }
        let a = asfreq_fn(Frequency::Monthly, Frequency::BusinessDaily, WeekendRule::Adjacent);
        let b = asfreq_fn(Frequency::Monthly, Frequency::BusinessDaily, WeekendRule::Unmapped);
        assert_eq!(a.unwrap() as usize, b.unwrap() as usize);
    }

    #[test]
    fn test_height_table() {
        let options: Vec<(Frequency, Frequency, usize)> = vec![
            (Frequency::Quarterly, Frequency::Annual, 4),
            (Frequency::Monthly, Frequency::Annual, 12),
            (Frequency::Monthly, Frequency::Quarterly, 3),
            (Frequency::Weekly, Frequency::Annual, 53),
            (Frequency::Weekly, Frequency::Quarterly, 13),
            (Frequency::Weekly, Frequency::Monthly, 4),
            (Frequency::BusinessDaily, Frequency::Annual, 262),
            (Frequency::BusinessDaily, Frequency::Quarterly, 66),
            (Frequency::BusinessDaily, Frequency::Monthly, 23),
            (Frequency::BusinessDaily, Frequency::Weekly, 5),
            (Frequency::Daily, Frequency::Annual, 366),
            (Frequency::Daily, Frequency::Quarterly, 92),
            (Frequency::Daily, Frequency::Monthly, 31),
            (Frequency::Daily, Frequency::Weekly, 7),
            (Frequency::Hourly, Frequency::Daily, 24),
            (Frequency::Hourly, Frequency::BusinessDaily, 24),
            (Frequency::Hourly, Frequency::Weekly, 168),
            (Frequency::Minutely, Frequency::Hourly, 60),
            (Frequency::Minutely, Frequency::Daily, 1440),
            (Frequency::Secondly, Frequency::Minutely, 60),
            (Frequency::Secondly, Frequency::Hourly, 3600),
            (Frequency::Secondly, Frequency::Daily, 86400),
            // up-direction and identity pairs stay flat
            (Frequency::Annual, Frequency::Daily, 1),
            (Frequency::Annual, Frequency::Quarterly, 1),
            (Frequency::Monthly, Frequency::Daily, 1),
            (Frequency::Daily, Frequency::Daily, 1),
            (Frequency::Undefined, Frequency::Daily, 1),
        ];
        for option in options.iter() {
            assert_eq!(
                option.2,
                height(option.0, option.1),
                "height {:?} -> {:?}",
                option.0,
                option.1
            );
        }
    }

    #[test]
    fn test_height_is_upper_bound_for_whole_periods() {
        // one coarse period never contains more fine sub-periods than the
        // table claims; checked over a leap year
        let y = 2024;
        let pairs: Vec<(Frequency, Frequency)> = vec![
            (Frequency::Quarterly, Frequency::Annual),
            (Frequency::Monthly, Frequency::Annual),
            (Frequency::Daily, Frequency::Annual),
            (Frequency::Daily, Frequency::Quarterly),
            (Frequency::Daily, Frequency::Monthly),
            (Frequency::BusinessDaily, Frequency::Annual),
        ];
        for (fine, coarse) in pairs.iter() {
            let down = asfreq_fn(*coarse, *fine, WeekendRule::Adjacent).unwrap();
            let coarse_ord = match coarse {
                Frequency::Annual => y,
                Frequency::Quarterly => (y - 1) * 4 + 1,
                Frequency::Monthly => (y - 1) * 12 + 1,
                _ => unreachable!(),
            };
            let n = down(coarse_ord, Anchor::End) - down(coarse_ord, Anchor::Start) + 1;
            assert!(
                n as usize <= height(*fine, *coarse),
                "{:?} in {:?}: {} > table",
                fine,
                coarse,
                n
            );
        }
    }
}
