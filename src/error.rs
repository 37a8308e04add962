//! Error types for anchored text.
//!
//! Anchor resolution never fails loudly: a miss is `None`. The errors here
//! cover the places where a caller hands in an explicit character range.

use std::fmt;

/// Result type alias for anchored text operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for anchored text operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Character range reaches past the end of the text.
    RangeOutOfBounds {
        location: usize,
        length: usize,
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RangeOutOfBounds {
                location,
                length,
                len,
            } => {
                write!(
                    f,
                    "range [{location}, +{length}) out of bounds for text of {len} characters"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::RangeOutOfBounds {
            location: 4,
            length: 10,
            len: 6,
        };
        let msg = err.to_string();
        assert!(msg.contains("[4, +10)"));
        assert!(msg.contains("6 characters"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&Error::RangeOutOfBounds {
            location: 0,
            length: 1,
            len: 0,
        });
    }
}
