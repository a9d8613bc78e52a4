//! Error type for palette validation.

use std::fmt;

/// Error type for palette validation.
///
/// Returned when a palette table is unusable: empty, too large to be
/// addressed by a `u8` index, or containing duplicate colors or names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No entries provided
    EmptyPalette,
    /// More entries than a `u8` index can address
    TooManyEntries {
        /// Number of entries provided
        len: usize,
    },
    /// Duplicate color found at the specified index
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
    /// Duplicate entry name found at the specified index
    DuplicateName {
        /// Index where the duplicate was found
        index: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::TooManyEntries { len } => {
                write!(f, "palette has {} entries (max 256)", len)
            }
            PaletteError::DuplicateColor { index } => {
                write!(f, "duplicate color found at index {}", index)
            }
            PaletteError::DuplicateName { index } => {
                write!(f, "duplicate name found at index {}", index)
            }
        }
    }
}

impl std::error::Error for PaletteError {}
