//! Array-level frequency conversion.
//!
//! [`Series`] pairs a 1-D value array with a mask and a start ordinal at a
//! given [`Frequency`]; [`Series::convert`] resamples the whole series to
//! another frequency, reshaping into a periods-by-sub-periods grid when the
//! target is coarser. [`asfreq_map`] is the element-wise scalar mapping with
//! no reshaping.

use crate::frequency::errors::{ConvertError, ConvertResult};
use crate::frequency::registry::{asfreq_fn, height, WeekendRule};
use crate::frequency::{Anchor, Frequency, INVALID_ORDINAL};
use itertools::izip;
use ndarray::{Array1, Array2, ArrayD, Axis};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// An ordinal-indexed series: contiguous values from `start` at `freq`.
///
/// The mask follows the masked-array convention of the surrounding glue: a
/// mask value of `true` marks a missing observation. Element `i` sits at
/// ordinal `start + i`; the series carries no explicit ordinal per element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series<T> {
    pub values: Array1<T>,
    pub mask: Array1<bool>,
    pub freq: Frequency,
    pub start: i64,
}

/// The result of an array conversion: a 1-D or 2-D payload plus the ordinal
/// of the first converted period.
///
/// Rank 2 means rows are coarse periods and columns are arrival-ordered
/// sub-period slots; cells no source element reached hold a zero value and
/// a `true` (missing) mask.
#[derive(Debug, Clone, PartialEq)]
pub struct Converted<T> {
    pub values: ArrayD<T>,
    pub mask: ArrayD<bool>,
    pub start: i64,
}

impl<T> Series<T> {
    /// Build a series, validating that values and mask agree in length.
    pub fn try_new(
        values: Array1<T>,
        mask: Array1<bool>,
        freq: Frequency,
        start: i64,
    ) -> ConvertResult<Self> {
        if values.len() != mask.len() {
            return Err(ConvertError::Mismatch {
                values: values.len(),
                mask: mask.len(),
            });
        }
        Ok(Series {
            values,
            mask,
            freq,
            start,
        })
    }
}

impl<T> Series<T>
where
    T: Clone + Zero,
{
    /// Resample the series to `to`, anchoring each element at the start or
    /// end of its period.
    ///
    /// Down-sampling to a coarser frequency with more than one sub-period
    /// per period produces a rank-2 grid sized by
    /// [`height`](crate::frequency::height); all other conversions stay
    /// rank 1. Elements are visited in ordinal order and each is placed in
    /// the next free sub-period slot of its destination period; elements
    /// mapping before the derived start are dropped.
    ///
    /// # Errors
    /// [`ConvertError::Unsupported`] when the registry has no entry for the
    /// pair, [`ConvertError::StartOutOfRange`] when the series start has no
    /// image in `to` even via the endpoint fallback, and
    /// [`ConvertError::EmptyRange`] when the derived end precedes the
    /// derived start.
    ///
    /// # Examples
    /// ```rust
    /// # use tseries::frequency::{Anchor, Frequency, Series};
    /// # use ndarray::Array1;
    /// let series = Series::try_new(
    ///     Array1::from(vec![1.0, 2.0, 3.0]),
    ///     Array1::from(vec![false, false, false]),
    ///     Frequency::Annual,
    ///     2023,
    /// ).unwrap();
    /// let result = series.convert(Frequency::Quarterly, Anchor::Start).unwrap();
    /// assert_eq!(2023 * 4 - 3, result.start);
    /// assert_eq!(vec![12], result.values.shape());
    /// ```
    pub fn convert(&self, to: Frequency, anchor: Anchor) -> ConvertResult<Converted<T>> {
        if self.freq == to {
            return Ok(Converted {
                values: self.values.clone().into_dyn(),
                mask: self.mask.clone().into_dyn(),
                start: self.start,
            });
        }

        let unsupported = ConvertError::Unsupported {
            from: self.freq,
            to,
        };
        // strict mapping for elements, rolling variant for the endpoints
        let main = asfreq_fn(self.freq, to, WeekendRule::Unmapped).ok_or(unsupported.clone())?;
        let endpoints = asfreq_fn(self.freq, to, WeekendRule::Adjacent).ok_or(unsupported)?;

        let last = self.start + self.values.len() as i64 - 1;

        let mut new_start = main(self.start, Anchor::Start);
        if new_start < 1 {
            new_start = endpoints(self.start, Anchor::End);
        }
        if new_start < 1 {
            return Err(ConvertError::StartOutOfRange {
                start: self.start,
                to,
            });
        }

        let mut new_end = main(last, Anchor::End);
        if new_end < 1 {
            new_end = endpoints(last, Anchor::Start);
        }
        if new_end < new_start {
            return Err(ConvertError::EmptyRange { new_start, new_end });
        }

        let new_len = (new_end - new_start + 1) as usize;
        let h = height(self.freq, to);

        // offset of the first element inside its destination period, so a
        // series starting mid-period lands in the right sub-period slot
        let mut slot: i64 = 0;
        if h > 1 {
            let reverse = asfreq_fn(to, self.freq, WeekendRule::Adjacent).ok_or(
                ConvertError::Unsupported {
                    from: to,
                    to: self.freq,
                },
            )?;
            slot = self.start - reverse(new_start, Anchor::Start);
        }

        let mut values = Array2::<T>::zeros((new_len, h));
        let mut mask = Array2::<bool>::from_elem((new_len, h), true);

        let mut prev = new_start;
        for (i, v, m) in izip!(0.., self.values.iter(), self.mask.iter()) {
            let cur = main(self.start + i, anchor);
            let row = cur - new_start;

            let mut col: i64 = 0;
            if h > 1 {
                // slot counting restarts on every change of destination
                // period; sentinel destinations participate so that the
                // first in-range element after a gap starts at slot 0
                if cur != prev {
                    slot = 0;
                    prev = cur;
                }
                col = slot;
                slot += 1;
            }

            if row > -1 {
                values[[row as usize, col as usize]] = v.clone();
                mask[[row as usize, col as usize]] = *m;
            }
        }

        let (values, mask) = if h > 1 {
            (values.into_dyn(), mask.into_dyn())
        } else {
            (
                values.index_axis_move(Axis(1), 0).into_dyn(),
                mask.index_axis_move(Axis(1), 0).into_dyn(),
            )
        };
        Ok(Converted {
            values,
            mask,
            start: new_start,
        })
    }
}

/// Apply the scalar conversion for `(from, to)` to every element of
/// `ordinals`, preserving shape.
///
/// Never fails: elements without an image, and every element of an
/// undefined pair, come back as [`INVALID_ORDINAL`], and interpreting the
/// sentinel is the caller's concern.
pub fn asfreq_map(
    ordinals: &Array1<i64>,
    from: Frequency,
    to: Frequency,
    anchor: Anchor,
) -> Array1<i64> {
    match asfreq_fn(from, to, WeekendRule::Adjacent) {
        Some(f) => ordinals.mapv(|o| f(o, anchor)),
        None => Array1::from_elem(ordinals.len(), INVALID_ORDINAL),
    }
}
