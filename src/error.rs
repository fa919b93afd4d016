#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Buffer is shorter than the header and payload require.
    #[error("Truncated buffer: need {needed} bytes at offset {offset}, have {actual}")]
    TruncatedBuffer {
        /// Offset of the read that failed
        offset: usize,
        /// Number of bytes the read needed
        needed: usize,
        /// Total length of the buffer
        actual: usize,
    },

    /// Header dimensions do not agree with the grid, or are not usable at all.
    #[error("Invalid dimensions: expected {expected:?} (bins, beams), got {actual:?}")]
    InvalidDimensions {
        expected: (usize, usize),
        actual: (i32, i32),
    },

    /// Grid dimensions do not fit in the header's 32-bit fields.
    #[error("Dimensions overflow header fields: {bins} bins x {beams} beams")]
    DimensionOverflow { bins: usize, beams: usize },

    /// Header name is not ASCII.
    #[error("Invalid dataset name: {0:?}")]
    InvalidName(Vec<u8>),

    /// Header element type does not match the dataset kind.
    #[error("Invalid value type: expected {expected}, got {actual}")]
    ValueType { expected: i32, actual: i32 },
}

pub type Result<T> = std::result::Result<T, Error>;
