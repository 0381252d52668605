//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Errors from [`Grid`](crate::Grid) construction.
///
/// Runtime coordinate misuse is not represented here: out-of-range
/// accesses are programming errors and fail fast via debug assertions
/// and slice bounds checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A dimension was zero; a grid must hold at least one cell.
    EmptyGrid,
    /// A dimension exceeds the maximum representable size.
    DimensionTooLarge {
        /// Which dimension ("width" or "height").
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// The total cell count `width * height` overflows `usize`.
    ///
    /// Only reachable on targets where `usize` is narrower than 64 bits;
    /// each dimension alone can still be valid.
    TooManyCells {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid dimensions must be at least 1x1"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum dimension {max}")
            }
            Self::TooManyCells { width, height } => {
                write!(f, "{width} x {height} cells overflow the address space")
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            GridError::EmptyGrid.to_string(),
            "grid dimensions must be at least 1x1"
        );
        let err = GridError::DimensionTooLarge {
            name: "width",
            value: u32::MAX,
            max: i32::MAX as u32,
        };
        assert!(err.to_string().contains("width"));
        assert!(err.to_string().contains("4294967295"));
        let err = GridError::TooManyCells {
            width: 1 << 16,
            height: 1 << 16,
        };
        assert!(err.to_string().contains("65536"));
    }
}
