use crate::frequency::Frequency;
use thiserror::Error;

/// Result alias for fallible conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Unified error type for the frequency conversion engine.
///
/// Out-of-range *scalar* conversions are not errors: the per-pair conversion
/// functions return the sentinel [`INVALID_ORDINAL`] and callers decide what
/// it means. This type covers the hard failures of the array-level
/// operations and the contract violations of the flag/selector surfaces.
///
/// [`INVALID_ORDINAL`]: crate::frequency::INVALID_ORDINAL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The series start date has no image in the target frequency, even
    /// after the endpoint fallback.
    #[error("start ordinal {start} is outside the allowable range of the {to} frequency")]
    StartOutOfRange { start: i64, to: Frequency },

    /// The derived end ordinal precedes the derived start ordinal, so the
    /// converted series would be empty.
    #[error("conversion produces an empty range ({new_start}..{new_end})")]
    EmptyRange { new_start: i64, new_end: i64 },

    /// The registry defines no conversion for this ordered frequency pair.
    #[error("no conversion is defined from {from} to {to}")]
    Unsupported { from: Frequency, to: Frequency },

    /// Series construction with values and mask of different lengths.
    #[error("values length {values} does not match mask length {mask}")]
    Mismatch { values: usize, mask: usize },

    /// A position or relation flag outside the documented set.
    #[error("unrecognized position flag {0:?}, expected 'S', 'E', 'B' or 'A'")]
    BadFlag(char),

    /// A date-field selector outside the documented set.
    #[error("unrecognized date field selector {0:?}")]
    BadField(char),

    /// An integer frequency code with no corresponding [`Frequency`].
    #[error("unrecognized frequency code {0}")]
    BadFrequencyCode(i32),

    /// A string frequency code with no corresponding [`Frequency`].
    #[error("unrecognized frequency string {0:?}")]
    BadFrequencyStr(String),

    /// An ordinal that the calendar cannot represent as a date.
    #[error("ordinal {ordinal} is not representable as a calendar date")]
    Date { ordinal: i64 },
}
