//! Postcode type.

use std::fmt;

/// Error returned when parsing an invalid postcode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid postcode: {reason}")]
pub struct InvalidPostcode {
    reason: &'static str,
}

/// A 4-digit Australian postcode.
///
/// Postcodes are always exactly 4 ASCII digits. This type guarantees
/// that any `Postcode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use fuel_server::domain::Postcode;
///
/// let brisbane = Postcode::parse("4000").unwrap();
/// assert_eq!(brisbane.as_str(), "4000");
///
/// // Leading zeros are kept
/// assert_eq!(Postcode::parse("0800").unwrap().as_str(), "0800");
///
/// // Wrong length is rejected
/// assert!(Postcode::parse("400").is_err());
/// assert!(Postcode::parse("40000").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Postcode([u8; 4]);

impl Postcode {
    /// Parse a postcode from a string.
    ///
    /// The input must be exactly 4 ASCII digits (0-9).
    pub fn parse(s: &str) -> Result<Self, InvalidPostcode> {
        let bytes = s.as_bytes();

        if bytes.len() != 4 {
            return Err(InvalidPostcode {
                reason: "must be exactly 4 digits",
            });
        }

        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(InvalidPostcode {
                reason: "must contain only digits 0-9",
            });
        }

        Ok(Postcode([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Returns the postcode as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Postcode({})", self.as_str())
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
