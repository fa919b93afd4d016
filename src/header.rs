//! Dataset header shared by every dataset in an ensemble.
//!
//! ```text
//! [0..4]   value type (i32 LE)
//! [4..8]   number of elements, i.e., bins (i32 LE)
//! [8..12]  element multiplier, i.e., beams (i32 LE)
//! [12..16] image (i32 LE)
//! [16..20] name length (i32 LE)
//! [20..]   name (name length bytes, ASCII)
//! ```
use serde::{Deserialize, Serialize};

use crate::bytes::{read_i32, write_i32, BYTES_IN_INT32};
use crate::error::{Error, Result};

/// Value type id for datasets of `f32` elements.
pub const VALUE_TYPE_FLOAT: i32 = 10;
/// Value type id for datasets of `i32` elements.
pub const VALUE_TYPE_INT: i32 = 20;

/// Number of fields in a dataset header, counting the name.
pub const NUM_DATASET_HEADER_ELEMENTS: usize = 6;
/// Size of the fixed integer portion of the header.
pub const BASE_HEADER_SIZE: usize = BYTES_IN_INT32 * (NUM_DATASET_HEADER_ELEMENTS - 1);

/// Offset at which a dataset's payload starts for a name of `name_len` bytes.
#[must_use]
pub fn header_size(name_len: usize) -> usize {
    BASE_HEADER_SIZE + name_len
}

/// Serialize the header fields in wire order.
///
/// The name is written as exactly `name_len` bytes; longer names are truncated and shorter
/// names are padded with NUL.
#[must_use]
pub fn generate_header(
    value_type: i32,
    elements: i32,
    multiplier: i32,
    image: i32,
    name_len: i32,
    name: &str,
) -> Vec<u8> {
    let name_len_bytes = usize::try_from(name_len).unwrap_or(0);
    let mut buf = Vec::with_capacity(header_size(name_len_bytes));
    for field in [value_type, elements, multiplier, image, name_len] {
        buf.extend_from_slice(&write_i32(field));
    }
    let mut name = name.as_bytes().to_vec();
    name.resize(name_len_bytes, 0);
    buf.extend_from_slice(&name);
    buf
}

/// Decoded dataset header.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DatasetHeader {
    pub value_type: i32,
    /// Number of bins
    pub num_elements: i32,
    /// Number of beams
    pub element_multiplier: i32,
    pub image: i32,
    /// ASCII name, including any trailing NUL; its length is the name length field.
    pub name: String,
}

impl DatasetHeader {
    /// Create a header for a dataset named `name` with `bins` x `beams` values.
    ///
    /// # Errors
    /// [Error::DimensionOverflow] if either dimension does not fit in an `i32`.
    pub fn new(value_type: i32, bins: usize, beams: usize, name: &str) -> Result<Self> {
        let dims = i32::try_from(bins).ok().zip(i32::try_from(beams).ok());
        let Some((num_elements, element_multiplier)) = dims else {
            return Err(Error::DimensionOverflow { bins, beams });
        };
        Ok(DatasetHeader {
            value_type,
            num_elements,
            element_multiplier,
            image: 0,
            name: name.to_string(),
        })
    }

    /// Decode a header from the start of `buf`.
    ///
    /// # Errors
    /// [Error::TruncatedBuffer] if `buf` is shorter than the header, or
    /// [Error::InvalidDimensions] if the element counts or name length are negative, or
    /// [Error::InvalidName] if the name is not ASCII.
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let value_type = read_i32(buf, 0)?;
        let num_elements = read_i32(buf, 4)?;
        let element_multiplier = read_i32(buf, 8)?;
        let image = read_i32(buf, 12)?;
        let raw_name_len = read_i32(buf, 16)?;

        if num_elements < 0 || element_multiplier < 0 {
            return Err(Error::InvalidDimensions {
                expected: (0, 0),
                actual: (num_elements, element_multiplier),
            });
        }
        let Ok(name_len) = usize::try_from(raw_name_len) else {
            return Err(Error::InvalidDimensions {
                expected: (0, 0),
                actual: (num_elements, element_multiplier),
            });
        };

        let end = header_size(name_len);
        let Some(name) = buf.get(BASE_HEADER_SIZE..end) else {
            return Err(Error::TruncatedBuffer {
                offset: BASE_HEADER_SIZE,
                needed: name_len,
                actual: buf.len(),
            });
        };
        if !name.is_ascii() {
            return Err(Error::InvalidName(name.to_vec()));
        }
        let name: String = name.iter().map(|b| char::from(*b)).collect();

        Ok(DatasetHeader {
            value_type,
            num_elements,
            element_multiplier,
            image,
            name,
        })
    }

    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        generate_header(
            self.value_type,
            self.num_elements,
            self.element_multiplier,
            self.image,
            i32::try_from(self.name.len()).unwrap_or(i32::MAX),
            &self.name,
        )
    }

    #[must_use]
    pub fn name_len(&self) -> usize {
        self.name.len()
    }

    /// Number of header bytes, i.e., the payload offset.
    #[must_use]
    pub fn size(&self) -> usize {
        header_size(self.name.len())
    }

    /// `(bins, beams)` declared by the header.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (
            usize::try_from(self.num_elements).unwrap_or(0),
            usize::try_from(self.element_multiplier).unwrap_or(0),
        )
    }

    /// Number of payload bytes for elements of `width` bytes, or `None` if that does not
    /// fit in a `usize`.
    #[must_use]
    pub fn payload_len(&self, width: usize) -> Option<usize> {
        let (bins, beams) = self.dimensions();
        bins.checked_mul(beams)?.checked_mul(width)
    }

    /// Total dataset size, header plus payload, or `None` on overflow.
    #[must_use]
    pub fn total_len(&self, width: usize) -> Option<usize> {
        self.size().checked_add(self.payload_len(width)?)
    }
}
