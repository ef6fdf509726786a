//! The crate's single error kind.

use std::error::Error;
use std::fmt;

/// A required collaborator was absent.
///
/// Raised only by the checked `try_*` entry points, synchronously and before
/// any element is moved; the sequence is left untouched. Anything else, such
/// as an inconsistent comparator or overflow in digit arithmetic, is a
/// contract violation the algorithms neither detect nor report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// The sequence to sort was not supplied.
    MissingInput,
    /// The comparator was not supplied.
    MissingComparator,
    /// The pivot source was not supplied (quicksort only).
    MissingPivotSource,
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput => write!(f, "no input sequence was supplied"),
            Self::MissingComparator => write!(f, "no comparator was supplied"),
            Self::MissingPivotSource => write!(f, "no pivot source was supplied"),
        }
    }
}

impl Error for SortError {}
