//! Convert ordinal-indexed time series between sampling [`Frequency`]s.
//!
//! The purpose of this module is to translate positions ("ordinals") in one
//! sampling frequency into the equivalent positions in another, and to
//! resample whole series on top of those translations. Every frequency
//! numbers its own periods independently: annual ordinals are calendar
//! years, monthly ordinals count months from year 1, business ordinals
//! compact weekdays to exactly 5 per 7 calendar days, and the sub-daily
//! frequencies tick linearly from a fixed origin day. An ordinal is
//! meaningless outside its frequency; conversion is the only bridge.
//!
//! # Scalar conversion
//!
//! The registry resolves a pure conversion function for every ordered pair
//! of frequencies, and [`asfreq_map`] applies it element-wise. The
//! [`Anchor`] selects which end of a period a coarse ordinal resolves to.
//!
//! ```rust
//! use tseries::frequency::{asfreq_map, calendar, Anchor, Frequency};
//! use ndarray::Array1;
//!
//! let ordinals = Array1::from(vec![2024]);
//! let first = asfreq_map(&ordinals, Frequency::Annual, Frequency::Daily, Anchor::Start);
//! let last = asfreq_map(&ordinals, Frequency::Annual, Frequency::Daily, Anchor::End);
//! assert_eq!(calendar::ordinal_from_ymd(2024, 1, 1).unwrap(), first[0]);
//! assert_eq!(calendar::ordinal_from_ymd(2024, 12, 31).unwrap(), last[0]);
//! ```
//!
//! Conversions without a valid image return the sentinel
//! [`INVALID_ORDINAL`] rather than failing: sub-daily ordinals exist only
//! from [`HIGH_FREQ_ORIG`] (1st January 1970) forward, and undefined pairs
//! have no images at all.
//!
//! # Series resampling
//!
//! [`Series::convert`] resamples a masked series. Down-sampling spreads
//! each coarse period over a row of arrival-ordered sub-period slots:
//!
//! ```rust
//! use tseries::frequency::{Anchor, Frequency, Series};
//! use ndarray::Array1;
//!
//! let jan = (2024 - 1) * 12 + 1;
//! let series = Series::try_new(
//!     Array1::from(vec![1.0, 2.0, 3.0]),
//!     Array1::from(vec![false, false, false]),
//!     Frequency::Monthly,
//!     jan,
//! ).unwrap();
//! let result = series.convert(Frequency::Annual, Anchor::Start).unwrap();
//! assert_eq!(vec![1, 12], result.values.shape().to_vec());
//! assert_eq!(2024, result.start);
//! ```
//!
//! # Calendar fields
//!
//! [`get_date_field`] decomposes ordinal arrays into calendar fields
//! (year, quarter, weekday, ISO week, time of day, ...), delegating the
//! calendar arithmetic to the [`calendar`] collaborator.

mod asfreq;
pub mod calendar;
mod convert;
mod errors;
mod fields;
mod frequency;
mod registry;

pub use crate::frequency::{
    asfreq::{HIGH_FREQ_ORIG, INVALID_ORDINAL},
    convert::{asfreq_map, Converted, Series},
    errors::{ConvertError, ConvertResult},
    fields::get_date_field,
    frequency::{Anchor, DateField, Frequency},
    registry::{asfreq_fn, height, AsfreqFn, WeekendRule},
};
