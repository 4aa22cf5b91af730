//! Per-frequency-pair ordinal conversion functions.
//!
//! Every function here is a pure mapping `(ordinal, anchor) -> ordinal`
//! between two frequencies' numbering schemes. Conversions are total except
//! where documented: an input with no image in the target frequency yields
//! [`INVALID_ORDINAL`], never an error. Calendar decomposition is delegated
//! to the [`calendar`] collaborator; everything else is closed-form integer
//! arithmetic.

use crate::frequency::calendar;
use crate::frequency::{Anchor, Frequency};
use chrono::Datelike;

/// Sentinel returned by a conversion whose input has no image in the target
/// frequency. A normal value, not an error; callers must check for it.
pub const INVALID_ORDINAL: i64 = -1;

/// Daily ordinal of the sub-daily origin (1st January 1970). Hourly,
/// minutely and secondly ordinals are defined only for days at or after
/// this origin.
pub const HIGH_FREQ_ORIG: i64 = 719_163;

const MINUTES_PER_DAY: i64 = 24 * 60;
const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Ticks per day of a sub-daily frequency, `None` for daily and coarser.
pub(crate) fn periods_per_day(freq: Frequency) -> Option<i64> {
    match freq {
        Frequency::Hourly => Some(24),
        Frequency::Minutely => Some(MINUTES_PER_DAY),
        Frequency::Secondly => Some(SECONDS_PER_DAY),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// business-day helpers
//
// Business ordinals compact the daily numbering to exactly 5 ordinals per
// 7 calendar days; the compaction below is only meaningful for daily
// ordinals that fall on weekdays.

fn busday(absdate: i64) -> i64 {
    (absdate / 7) * 5 + absdate % 7
}

/// Business ordinal of a daily ordinal, weekend dates rolled forward to the
/// following Monday.
fn weekend_to_monday(absdate: i64) -> i64 {
    match calendar::weekday_from_ordinal(absdate) {
        Some(dow) if dow > 4 => busday(absdate + 7 - dow),
        Some(_) => busday(absdate),
        None => INVALID_ORDINAL,
    }
}

/// Business ordinal of a daily ordinal, weekend dates rolled backward to the
/// preceding Friday.
fn weekend_to_friday(absdate: i64) -> i64 {
    match calendar::weekday_from_ordinal(absdate) {
        Some(dow) if dow > 4 => busday(absdate - (dow - 4)),
        Some(_) => busday(absdate),
        None => INVALID_ORDINAL,
    }
}

// ---------------------------------------------------------------------------
// period decomposition helpers

fn ym_of_month_ordinal(ordinal: i64) -> (i64, i64) {
    let y = (ordinal - 1) / 12 + 1;
    (y, ordinal - 12 * (y - 1))
}

fn ym_of_quarter_ordinal(ordinal: i64) -> (i64, i64) {
    let y = (ordinal - 1) / 4 + 1;
    (y, (ordinal + 4) * 3 - 12 * y - 2)
}

/// First tick (`Start`) or last tick (`End`) of a daily ordinal in a
/// sub-daily frequency with `per_day` periods per day. Days before
/// [`HIGH_FREQ_ORIG`] are out of range.
pub(crate) fn to_highfreq(daily: i64, anchor: Anchor, per_day: i64) -> i64 {
    if daily >= HIGH_FREQ_ORIG {
        match anchor {
            Anchor::Start => (daily - HIGH_FREQ_ORIG) * per_day + 1,
            Anchor::End => (daily - HIGH_FREQ_ORIG + 1) * per_day,
        }
    } else {
        INVALID_ORDINAL
    }
}

/// Linear up-scaling between two sub-daily frequencies whose tick counts
/// differ by the factor `k`.
fn upscale(ordinal: i64, anchor: Anchor, k: i64) -> i64 {
    match anchor {
        Anchor::Start => (ordinal - 1) * k + 1,
        Anchor::End => ordinal * k,
    }
}

// ---------------------------------------------------------------------------
// from Daily

pub(crate) fn daily_to_annual(ordinal: i64, _anchor: Anchor) -> i64 {
    match calendar::date_from_ordinal(ordinal) {
        Some(date) => date.year() as i64,
        None => INVALID_ORDINAL,
    }
}

pub(crate) fn daily_to_quarterly(ordinal: i64, _anchor: Anchor) -> i64 {
    match calendar::date_from_ordinal(ordinal) {
        Some(date) => {
            let (y, m) = (date.year() as i64, date.month() as i64);
            (y - 1) * 4 + (m - 1) / 3 + 1
        }
        None => INVALID_ORDINAL,
    }
}

pub(crate) fn daily_to_monthly(ordinal: i64, _anchor: Anchor) -> i64 {
    match calendar::date_from_ordinal(ordinal) {
        Some(date) => (date.year() as i64 - 1) * 12 + date.month() as i64,
        None => INVALID_ORDINAL,
    }
}

pub(crate) fn daily_to_weekly(ordinal: i64, _anchor: Anchor) -> i64 {
    (ordinal - 1) / 7 + 1
}

/// Daily to business, weekends rolled to the adjacent business day:
/// `Start` rounds down to the preceding Friday, `End` rounds up to the
/// following Monday.
pub(crate) fn daily_to_business(ordinal: i64, anchor: Anchor) -> i64 {
    match anchor {
        Anchor::Start => weekend_to_friday(ordinal),
        Anchor::End => weekend_to_monday(ordinal),
    }
}

/// Strict daily-to-business variant used by bulk array conversion: weekend
/// dates have no business image and yield the sentinel, so a weekend value
/// is never duplicated onto an adjacent business day.
pub(crate) fn daily_to_business_exact(ordinal: i64, _anchor: Anchor) -> i64 {
    match calendar::weekday_from_ordinal(ordinal) {
        Some(dow) if dow > 4 => INVALID_ORDINAL,
        Some(_) => busday(ordinal),
        None => INVALID_ORDINAL,
    }
}

// identity, required by the date field extractor
pub(crate) fn daily_to_daily(ordinal: i64, _anchor: Anchor) -> i64 {
    ordinal
}

pub(crate) fn daily_to_hourly(ordinal: i64, anchor: Anchor) -> i64 {
    to_highfreq(ordinal, anchor, 24)
}

pub(crate) fn daily_to_minutely(ordinal: i64, anchor: Anchor) -> i64 {
    to_highfreq(ordinal, anchor, MINUTES_PER_DAY)
}

pub(crate) fn daily_to_secondly(ordinal: i64, anchor: Anchor) -> i64 {
    to_highfreq(ordinal, anchor, SECONDS_PER_DAY)
}

// ---------------------------------------------------------------------------
// from Secondly

pub(crate) fn secondly_to_daily(ordinal: i64, _anchor: Anchor) -> i64 {
    (ordinal - 1) / SECONDS_PER_DAY + HIGH_FREQ_ORIG
}

pub(crate) fn secondly_to_annual(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_annual(secondly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn secondly_to_quarterly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_quarterly(secondly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn secondly_to_monthly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_monthly(secondly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn secondly_to_weekly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_weekly(secondly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn secondly_to_business(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_business(secondly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn secondly_to_business_exact(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_business_exact(secondly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn secondly_to_hourly(ordinal: i64, _anchor: Anchor) -> i64 {
    (ordinal - 1) / (60 * 60) + 1
}

pub(crate) fn secondly_to_minutely(ordinal: i64, _anchor: Anchor) -> i64 {
    (ordinal - 1) / 60 + 1
}

// ---------------------------------------------------------------------------
// from Minutely

pub(crate) fn minutely_to_daily(ordinal: i64, _anchor: Anchor) -> i64 {
    (ordinal - 1) / MINUTES_PER_DAY + HIGH_FREQ_ORIG
}

pub(crate) fn minutely_to_annual(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_annual(minutely_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn minutely_to_quarterly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_quarterly(minutely_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn minutely_to_monthly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_monthly(minutely_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn minutely_to_weekly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_weekly(minutely_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn minutely_to_business(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_business(minutely_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn minutely_to_business_exact(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_business_exact(minutely_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn minutely_to_hourly(ordinal: i64, _anchor: Anchor) -> i64 {
    (ordinal - 1) / 60 + 1
}

pub(crate) fn minutely_to_secondly(ordinal: i64, anchor: Anchor) -> i64 {
    upscale(ordinal, anchor, 60)
}

// ---------------------------------------------------------------------------
// from Hourly

pub(crate) fn hourly_to_daily(ordinal: i64, _anchor: Anchor) -> i64 {
    (ordinal - 1) / 24 + HIGH_FREQ_ORIG
}

pub(crate) fn hourly_to_annual(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_annual(hourly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn hourly_to_quarterly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_quarterly(hourly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn hourly_to_monthly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_monthly(hourly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn hourly_to_weekly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_weekly(hourly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn hourly_to_business(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_business(hourly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn hourly_to_business_exact(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_business_exact(hourly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn hourly_to_minutely(ordinal: i64, anchor: Anchor) -> i64 {
    upscale(ordinal, anchor, 60)
}

pub(crate) fn hourly_to_secondly(ordinal: i64, anchor: Anchor) -> i64 {
    upscale(ordinal, anchor, 60 * 60)
}

// ---------------------------------------------------------------------------
// from BusinessDaily

/// Inverse of the 5-per-7 business compaction.
pub(crate) fn business_to_daily(ordinal: i64, _anchor: Anchor) -> i64 {
    ((ordinal - 1) / 5) * 7 + (ordinal - 1) % 5 + 1
}

pub(crate) fn business_to_annual(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_annual(business_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn business_to_quarterly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_quarterly(business_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn business_to_monthly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_monthly(business_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn business_to_weekly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_weekly(business_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn business_to_hourly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_hourly(business_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn business_to_minutely(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_minutely(business_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn business_to_secondly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_secondly(business_to_daily(ordinal, anchor), anchor)
}

// ---------------------------------------------------------------------------
// from Weekly

pub(crate) fn weekly_to_daily(ordinal: i64, anchor: Anchor) -> i64 {
    match anchor {
        Anchor::Start => ordinal * 7 - 6,
        Anchor::End => ordinal * 7,
    }
}

// A week bucket straddling a period boundary belongs to the period
// containing its final day, whichever anchor is requested.
pub(crate) fn weekly_to_annual(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_annual(weekly_to_daily(ordinal, Anchor::End), anchor)
}

pub(crate) fn weekly_to_quarterly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_quarterly(weekly_to_daily(ordinal, Anchor::End), anchor)
}

pub(crate) fn weekly_to_monthly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_monthly(weekly_to_daily(ordinal, Anchor::End), anchor)
}

/// `Start` resolves to the first business day of the week bucket, `End` to
/// the last, so the weekend rollover direction is the reverse of
/// [`daily_to_business`].
pub(crate) fn weekly_to_business(ordinal: i64, anchor: Anchor) -> i64 {
    let daily = weekly_to_daily(ordinal, anchor);
    match anchor {
        Anchor::Start => weekend_to_monday(daily),
        Anchor::End => weekend_to_friday(daily),
    }
}

pub(crate) fn weekly_to_hourly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_hourly(weekly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn weekly_to_minutely(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_minutely(weekly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn weekly_to_secondly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_secondly(weekly_to_daily(ordinal, anchor), anchor)
}

// ---------------------------------------------------------------------------
// from Monthly

pub(crate) fn monthly_to_daily(ordinal: i64, anchor: Anchor) -> i64 {
    match anchor {
        Anchor::Start => {
            let (y, m) = ym_of_month_ordinal(ordinal);
            calendar::ordinal_from_ymd(y, m, 1).unwrap_or(INVALID_ORDINAL)
        }
        Anchor::End => {
            let (y, m) = ym_of_month_ordinal(ordinal + 1);
            calendar::ordinal_from_ymd(y, m, 1).map_or(INVALID_ORDINAL, |d| d - 1)
        }
    }
}

pub(crate) fn monthly_to_annual(ordinal: i64, _anchor: Anchor) -> i64 {
    (ordinal - 1) / 12 + 1
}

pub(crate) fn monthly_to_quarterly(ordinal: i64, _anchor: Anchor) -> i64 {
    (ordinal - 1) / 3 + 1
}

pub(crate) fn monthly_to_weekly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_weekly(monthly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn monthly_to_business(ordinal: i64, anchor: Anchor) -> i64 {
    let daily = monthly_to_daily(ordinal, anchor);
    match anchor {
        Anchor::Start => weekend_to_monday(daily),
        Anchor::End => weekend_to_friday(daily),
    }
}

pub(crate) fn monthly_to_hourly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_hourly(monthly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn monthly_to_minutely(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_minutely(monthly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn monthly_to_secondly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_secondly(monthly_to_daily(ordinal, anchor), anchor)
}

// ---------------------------------------------------------------------------
// from Quarterly

pub(crate) fn quarterly_to_daily(ordinal: i64, anchor: Anchor) -> i64 {
    match anchor {
        Anchor::Start => {
            let (y, m) = ym_of_quarter_ordinal(ordinal);
            calendar::ordinal_from_ymd(y, m, 1).unwrap_or(INVALID_ORDINAL)
        }
        Anchor::End => {
            let (y, m) = ym_of_quarter_ordinal(ordinal + 1);
            calendar::ordinal_from_ymd(y, m, 1).map_or(INVALID_ORDINAL, |d| d - 1)
        }
    }
}

pub(crate) fn quarterly_to_annual(ordinal: i64, _anchor: Anchor) -> i64 {
    (ordinal - 1) / 4 + 1
}

pub(crate) fn quarterly_to_monthly(ordinal: i64, anchor: Anchor) -> i64 {
    match anchor {
        Anchor::Start => ordinal * 3 - 2,
        Anchor::End => ordinal * 3,
    }
}

pub(crate) fn quarterly_to_weekly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_weekly(quarterly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn quarterly_to_business(ordinal: i64, anchor: Anchor) -> i64 {
    let daily = quarterly_to_daily(ordinal, anchor);
    match anchor {
        Anchor::Start => weekend_to_monday(daily),
        Anchor::End => weekend_to_friday(daily),
    }
}

pub(crate) fn quarterly_to_hourly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_hourly(quarterly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn quarterly_to_minutely(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_minutely(quarterly_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn quarterly_to_secondly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_secondly(quarterly_to_daily(ordinal, anchor), anchor)
}

// ---------------------------------------------------------------------------
// from Annual

pub(crate) fn annual_to_daily(ordinal: i64, anchor: Anchor) -> i64 {
    match anchor {
        Anchor::Start => calendar::ordinal_from_ymd(ordinal, 1, 1).unwrap_or(INVALID_ORDINAL),
        Anchor::End => {
            calendar::ordinal_from_ymd(ordinal + 1, 1, 1).map_or(INVALID_ORDINAL, |d| d - 1)
        }
    }
}

pub(crate) fn annual_to_quarterly(ordinal: i64, anchor: Anchor) -> i64 {
    match anchor {
        Anchor::Start => ordinal * 4 - 3,
        Anchor::End => ordinal * 4,
    }
}

pub(crate) fn annual_to_monthly(ordinal: i64, anchor: Anchor) -> i64 {
    match anchor {
        Anchor::Start => ordinal * 12 - 11,
        Anchor::End => ordinal * 12,
    }
}

pub(crate) fn annual_to_weekly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_weekly(annual_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn annual_to_business(ordinal: i64, anchor: Anchor) -> i64 {
    let daily = annual_to_daily(ordinal, anchor);
    match anchor {
        Anchor::Start => weekend_to_monday(daily),
        Anchor::End => weekend_to_friday(daily),
    }
}

pub(crate) fn annual_to_hourly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_hourly(annual_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn annual_to_minutely(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_minutely(annual_to_daily(ordinal, anchor), anchor)
}

pub(crate) fn annual_to_secondly(ordinal: i64, anchor: Anchor) -> i64 {
    daily_to_secondly(annual_to_daily(ordinal, anchor), anchor)
}
