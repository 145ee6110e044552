//! Registration-plate parsing.
//!
//! Registrations nominally follow `<prefix>-<numeric>-<suffix>-<serial>`
//! (e.g. `KA-01-HH-1234`), but the protocol only ever interprets one piece
//! of them: the **numeric segment**, the field after the first `-`. Plate
//! parity is the odd/even classification of that segment, and it is the
//! only place a registration is validated at all. Parking accepts any
//! string, so a malformed plate surfaces later, when a parity query first
//! needs the number.

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::digit1;
use nom::combinator::{eof, peek};
use nom::sequence::terminated;
use nom::IResult;

use crate::error::PlateError;

/// Odd/even classification of a plate's numeric segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    /// The numeric segment is odd.
    Odd,
    /// The numeric segment is even.
    Even,
}

impl Parity {
    /// Classify a number.
    ///
    /// # Example
    ///
    /// ```
    /// use park_proto::Parity;
    ///
    /// assert_eq!(Parity::of(1), Parity::Odd);
    /// assert_eq!(Parity::of(2026), Parity::Even);
    /// ```
    pub fn of(n: u64) -> Self {
        if n % 2 == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }

    /// Whether `n` has this parity.
    pub fn matches(self, n: u64) -> bool {
        Self::of(n) == self
    }

    /// Lowercase name, for log records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Odd => "odd",
            Self::Even => "even",
        }
    }
}

/// Recognize the numeric segment at the head of `input`: one or more ASCII
/// digits terminated by the next `-` or the end of the registration.
fn numeric_segment(input: &str) -> IResult<&str, &str> {
    terminated(digit1, alt((peek(tag("-")), eof)))(input)
}

/// Extract the numeric segment of a registration as an integer.
///
/// Everything before the first `-` is an opaque prefix. The field after it
/// must be purely numeric; a trailing `-<suffix>-<serial>` tail is allowed
/// but not required, so two-field plates like `B-2` parse fine.
///
/// # Example
///
/// ```
/// use park_proto::plate_number;
///
/// assert_eq!(plate_number("KA-01-HH-1234").unwrap(), 1);
/// assert_eq!(plate_number("B-2").unwrap(), 2);
/// assert!(plate_number("SCOOTER").is_err());
/// assert!(plate_number("KA-x1-HH").is_err());
/// ```
pub fn plate_number(registration: &str) -> Result<u64, PlateError> {
    let Some((_prefix, rest)) = registration.split_once('-') else {
        return Err(PlateError::MissingNumber {
            registration: registration.to_string(),
        });
    };

    let (_, digits) = numeric_segment(rest).map_err(|_| PlateError::InvalidNumber {
        registration: registration.to_string(),
    })?;

    // digit1 guarantees ASCII digits; only overflow can fail here.
    digits.parse().map_err(|_| PlateError::InvalidNumber {
        registration: registration.to_string(),
    })
}

/// Classify a registration's numeric segment as odd or even.
///
/// # Example
///
/// ```
/// use park_proto::{plate_parity, Parity};
///
/// assert_eq!(plate_parity("KA-01-HH-9999").unwrap(), Parity::Odd);
/// assert_eq!(plate_parity("KA-02-HH-9999").unwrap(), Parity::Even);
/// ```
pub fn plate_parity(registration: &str) -> Result<Parity, PlateError> {
    plate_number(registration).map(Parity::of)
}
