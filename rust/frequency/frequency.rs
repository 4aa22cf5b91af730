use crate::frequency::errors::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A sampling frequency for ordinal-indexed time series.
///
/// Each variant defines its own ordinal numbering scheme: ordinal `n` at
/// `Annual` denotes a calendar year, at `Daily` a proleptic day, at
/// `Secondly` a second counted from the sub-daily origin, and so on.
/// Ordinals are only comparable within one [Frequency]; crossing frequencies
/// requires a conversion function.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    /// One ordinal per calendar year. Ordinal `y` is the year `y` itself.
    Annual,
    /// One ordinal per calendar quarter: `(year - 1) * 4 + quarter`.
    Quarterly,
    /// One ordinal per calendar month: `(year - 1) * 12 + month`.
    Monthly,
    /// Epoch-anchored 7-day buckets: `(day - 1) / 7 + 1`. These are not
    /// ISO calendar weeks.
    Weekly,
    /// Weekdays only, compacted to exactly 5 ordinals per 7 calendar days.
    BusinessDaily,
    /// Proleptic day ordinals, day 1 being 1st January of year 1.
    Daily,
    /// 24 ordinals per day, defined from the sub-daily origin forward.
    Hourly,
    /// 1440 ordinals per day, defined from the sub-daily origin forward.
    Minutely,
    /// 86400 ordinals per day, defined from the sub-daily origin forward.
    Secondly,
    /// No frequency attached. Participates in no conversion.
    Undefined,
}

impl Frequency {
    /// Return the stable integer code identifying this frequency.
    ///
    /// The codes are exported for surrounding glue that stores or transmits
    /// frequencies as plain integers; they round-trip through
    /// [`Frequency::try_from`].
    pub const fn code(&self) -> i32 {
        match self {
            Frequency::Annual => 1000,
            Frequency::Quarterly => 2000,
            Frequency::Monthly => 3000,
            Frequency::Weekly => 4000,
            Frequency::BusinessDaily => 5000,
            Frequency::Daily => 6000,
            Frequency::Hourly => 7000,
            Frequency::Minutely => 8000,
            Frequency::Secondly => 9000,
            Frequency::Undefined => -9999,
        }
    }
}

impl TryFrom<i32> for Frequency {
    type Error = ConvertError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1000 => Ok(Frequency::Annual),
            2000 => Ok(Frequency::Quarterly),
            3000 => Ok(Frequency::Monthly),
            4000 => Ok(Frequency::Weekly),
            5000 => Ok(Frequency::BusinessDaily),
            6000 => Ok(Frequency::Daily),
            7000 => Ok(Frequency::Hourly),
            8000 => Ok(Frequency::Minutely),
            9000 => Ok(Frequency::Secondly),
            -9999 => Ok(Frequency::Undefined),
            _ => Err(ConvertError::BadFrequencyCode(code)),
        }
    }
}

impl FromStr for Frequency {
    type Err = ConvertError;

    /// Parse the single-letter frequency codes used by the surrounding glue.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Frequency::Annual),
            "Q" => Ok(Frequency::Quarterly),
            "M" => Ok(Frequency::Monthly),
            "W" => Ok(Frequency::Weekly),
            "B" => Ok(Frequency::BusinessDaily),
            "D" => Ok(Frequency::Daily),
            "H" => Ok(Frequency::Hourly),
            "T" => Ok(Frequency::Minutely),
            "S" => Ok(Frequency::Secondly),
            "U" => Ok(Frequency::Undefined),
            _ => Err(ConvertError::BadFrequencyStr(s.to_string())),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Frequency::Annual => "A",
            Frequency::Quarterly => "Q",
            Frequency::Monthly => "M",
            Frequency::Weekly => "W",
            Frequency::BusinessDaily => "B",
            Frequency::Daily => "D",
            Frequency::Hourly => "H",
            Frequency::Minutely => "T",
            Frequency::Secondly => "S",
            Frequency::Undefined => "U",
        };
        write!(f, "{}", s)
    }
}

/// Selects which end of a period range a conversion resolves to.
///
/// When a coarse ordinal maps to a range of finer ordinals, `Start` yields
/// the first fine ordinal of the range and `End` the last. In the opposite
/// direction the containing coarse period is unique and the anchor is
/// accepted only for interface symmetry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    /// Resolve to the first fine ordinal of the period ("before", round-down).
    Start,
    /// Resolve to the last fine ordinal of the period ("after", round-up).
    End,
}

impl TryFrom<char> for Anchor {
    type Error = ConvertError;

    /// Accepts the position flags `'S'`/`'E'` and the relation flags
    /// `'B'`/`'A'`. Any other character is a programmer error.
    fn try_from(flag: char) -> Result<Self, Self::Error> {
        match flag {
            'S' | 'B' => Ok(Anchor::Start),
            'E' | 'A' => Ok(Anchor::End),
            c => Err(ConvertError::BadFlag(c)),
        }
    }
}

/// A calendar field extractable from an ordinal via [`get_date_field`].
///
/// [`get_date_field`]: crate::frequency::get_date_field
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateField {
    Year,
    Quarter,
    Month,
    Day,
    DayOfYear,
    /// Day of week, numbered Monday = 0 through Sunday = 6.
    Weekday,
    /// ISO 8601 week number.
    WeekOfYear,
    Hour,
    Minute,
    Second,
}

impl TryFrom<char> for DateField {
    type Error = ConvertError;

    /// Accepts the single-character field selectors of the external
    /// interface. An unrecognized selector is a programmer error.
    fn try_from(selector: char) -> Result<Self, Self::Error> {
        match selector {
            'Y' => Ok(DateField::Year),
            'Q' => Ok(DateField::Quarter),
            'M' => Ok(DateField::Month),
            'D' => Ok(DateField::Day),
            'R' => Ok(DateField::DayOfYear),
            'W' => Ok(DateField::Weekday),
            'I' => Ok(DateField::WeekOfYear),
            'H' => Ok(DateField::Hour),
            'T' => Ok(DateField::Minute),
            'S' => Ok(DateField::Second),
            c => Err(ConvertError::BadField(c)),
        }
    }
}
