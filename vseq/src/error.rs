use core::fmt;

/// Errors reported by sequence mutations.
///
/// Benign conditions (empty bulk input, out-of-range reads) are not errors; they are no-ops
/// or `None`. The variants here indicate caller misuse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A positional write or insert addressed an index past the end.
    IndexOutOfBounds { index: usize, len: usize },
    /// Entities of a keyed list are derived from keys and cannot be assigned by index.
    ReadOnlyIndexer { index: usize },
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} is out of bounds for length {len}")
            }
            Self::ReadOnlyIndexer { index } => write!(
                f,
                "cannot assign index {index}: entities are derived from keys, replace the key list instead"
            ),
        }
    }
}

impl core::error::Error for Error {}
