//! Bin x Beam dataset grids.
//!
//! Every beam oriented dataset in an ensemble has the same shape: a header followed by
//! `bins * beams` fixed width values stored bin-major, beam-minor. [Grid] implements the
//! decode/encode cycle once and each dataset kind only provides its configuration through
//! [DatasetKind].
mod amplitude;
mod beam_velocity;
mod correlation;
mod good_beam;
mod good_earth;

use std::fmt::{Debug, Display};
use std::marker::PhantomData;

use ndarray::{Array2, ArrayView1, ArrayView2};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::bytes::{read_f32, read_i32, write_f32, write_i32, BYTES_IN_FLOAT, BYTES_IN_INT32};
use crate::error::{Error, Result};
use crate::header::{DatasetHeader, VALUE_TYPE_FLOAT, VALUE_TYPE_INT};

pub use amplitude::{Amplitude, AmplitudeGrid};
pub use beam_velocity::{BeamVelocity, BeamVelocityGrid};
pub use correlation::{Correlation, CorrelationGrid};
pub use good_beam::{GoodBeam, GoodBeamGrid};
pub use good_earth::{GoodEarth, GoodEarthGrid};

/// Value the instrument uses for bad or missing floating point data.
pub const BAD_VELOCITY: f32 = 88.888;
/// Value used for bad or missing integer data.
pub const BAD_INT: i32 = -32768;

/// A scalar stored in a dataset payload.
pub trait Element:
    Copy + PartialEq + PartialOrd + Debug + Display + Serialize + DeserializeOwned + Send + Sync
{
    /// Number of bytes per encoded value.
    const WIDTH: usize;
    /// Header value type id.
    const VALUE_TYPE: i32;
    /// Sentinel a grid is filled with before decoding.
    const BAD: Self;

    /// Read one value at `offset`.
    ///
    /// # Errors
    /// [Error::TruncatedBuffer] if there are not [Element::WIDTH] bytes at `offset`.
    fn read(buf: &[u8], offset: usize) -> Result<Self>;
    fn write(self) -> [u8; 4];
    fn to_f64(self) -> f64;

    /// True for the sentinel, i.e., a value that was never decoded or that the instrument
    /// marked bad.
    fn is_bad(self) -> bool {
        self == Self::BAD
    }
}

impl Element for f32 {
    const WIDTH: usize = BYTES_IN_FLOAT;
    const VALUE_TYPE: i32 = VALUE_TYPE_FLOAT;
    const BAD: Self = BAD_VELOCITY;

    fn read(buf: &[u8], offset: usize) -> Result<Self> {
        read_f32(buf, offset)
    }

    fn write(self) -> [u8; 4] {
        write_f32(self)
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn is_bad(self) -> bool {
        self == Self::BAD || self.is_nan()
    }
}

impl Element for i32 {
    const WIDTH: usize = BYTES_IN_INT32;
    const VALUE_TYPE: i32 = VALUE_TYPE_INT;
    const BAD: Self = BAD_INT;

    fn read(buf: &[u8], offset: usize) -> Result<Self> {
        read_i32(buf, offset)
    }

    fn write(self) -> [u8; 4] {
        write_i32(self)
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

/// Configuration for one kind of dataset.
pub trait DatasetKind {
    type Element: Element;

    /// Dataset name as it appears in the header, including the trailing NUL.
    const NAME: &'static str;
    /// Record type written in the second column of every CSV line.
    const CSV_TAG: &'static str;

    /// PD0 value written for cells holding [Element::BAD].
    const PD0_BAD: i32;

    /// Convert a single good value to PD0 counts for PD0 beam `target_beam`.
    ///
    /// `repeat_factor` is the value returned by [crate::pd0::repeat_factor]. Bad values
    /// never reach this; they are written as [DatasetKind::PD0_BAD].
    fn pd0_count(value: Self::Element, target_beam: usize, repeat_factor: f64) -> i32;
}

/// Make sure `buf` holds the whole dataset `header` describes.
fn check_len<E: Element>(header: &DatasetHeader, buf: &[u8]) -> Result<()> {
    match header.total_len(E::WIDTH) {
        Some(total) if total <= buf.len() => Ok(()),
        total => Err(Error::TruncatedBuffer {
            offset: header.size(),
            needed: total.map_or(usize::MAX, |t| t - header.size()),
            actual: buf.len(),
        }),
    }
}

/// Bin x Beam matrix of values for dataset kind `K`.
///
/// Dimensions are fixed when the grid is created. Every cell holds [Element::BAD] until
/// the grid is decoded.
///
/// # Example
/// ```
/// use adcp_ensemble::dataset::{CorrelationGrid, BAD_VELOCITY};
///
/// let mut grid = CorrelationGrid::new(2, 4);
/// assert_eq!(grid.get(0, 0), Some(BAD_VELOCITY));
///
/// grid.set(1, 3, 0.75);
/// let bytes = grid.encode().unwrap();
/// let decoded = CorrelationGrid::from_bytes(&bytes).unwrap();
/// assert_eq!(decoded, grid);
/// ```
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Grid<K: DatasetKind> {
    values: Array2<K::Element>,
    #[serde(skip)]
    kind: PhantomData<K>,
}

impl<K: DatasetKind> Clone for Grid<K> {
    fn clone(&self) -> Self {
        Grid {
            values: self.values.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: DatasetKind> PartialEq for Grid<K> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<K: DatasetKind> Debug for Grid<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("name", &K::NAME.trim_end_matches('\0'))
            .field("values", &self.values)
            .finish()
    }
}

impl<K: DatasetKind> Grid<K> {
    /// Create a grid of `bins` x `beams` filled with [Element::BAD].
    #[must_use]
    pub fn new(bins: usize, beams: usize) -> Self {
        Grid {
            values: Array2::from_elem((bins, beams), K::Element::BAD),
            kind: PhantomData,
        }
    }

    /// Create a grid sized from the header at the start of `buf` and decode it.
    ///
    /// The buffer length is checked against the header before the grid is allocated.
    ///
    /// # Errors
    /// See [Grid::decode].
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        let header = DatasetHeader::decode(buf)?;
        check_len::<K::Element>(&header, buf).inspect_err(|err| {
            debug!(dataset = K::NAME.trim_end_matches('\0'), %err, "dataset too short");
        })?;
        let (bins, beams) = header.dimensions();
        let mut grid = Self::new(bins, beams);
        grid.decode(buf)?;
        Ok(grid)
    }

    #[must_use]
    pub fn bins(&self) -> usize {
        self.values.nrows()
    }

    #[must_use]
    pub fn beams(&self) -> usize {
        self.values.ncols()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn get(&self, bin: usize, beam: usize) -> Option<K::Element> {
        self.values.get((bin, beam)).copied()
    }

    /// Set a single value. Returns `false` if `(bin, beam)` is outside the grid.
    pub fn set(&mut self, bin: usize, beam: usize, value: K::Element) -> bool {
        match self.values.get_mut((bin, beam)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// All beam values for `bin`, in beam order.
    #[must_use]
    pub fn bin(&self, bin: usize) -> Option<ArrayView1<'_, K::Element>> {
        (bin < self.bins()).then(|| self.values.row(bin))
    }

    /// All values for `beam`, in bin order.
    #[must_use]
    pub fn beam(&self, beam: usize) -> Option<ArrayView1<'_, K::Element>> {
        (beam < self.beams()).then(|| self.values.column(beam))
    }

    #[must_use]
    pub fn values(&self) -> ArrayView2<'_, K::Element> {
        self.values.view()
    }

    /// Decode the dataset in `buf`, header included.
    ///
    /// Values are only committed once the whole payload has been read. On error the grid
    /// keeps whatever it held before the call and should be discarded by the caller.
    ///
    /// # Errors
    /// [Error::TruncatedBuffer] if `buf` ends before the header or payload does,
    /// [Error::InvalidDimensions] if the header does not describe a grid of this shape, or
    /// [Error::ValueType] if the header element type does not match this kind.
    pub fn decode(&mut self, buf: &[u8]) -> Result<()> {
        let staged = self.read_values(buf).inspect_err(|err| {
            debug!(dataset = K::NAME.trim_end_matches('\0'), %err, "dataset decode failed");
        })?;
        self.values = staged;
        trace!(
            dataset = K::NAME.trim_end_matches('\0'),
            bins = self.bins(),
            beams = self.beams(),
            "decoded dataset"
        );
        Ok(())
    }

    fn read_values(&self, buf: &[u8]) -> Result<Array2<K::Element>> {
        let header = DatasetHeader::decode(buf)?;
        if header.value_type != K::Element::VALUE_TYPE {
            return Err(Error::ValueType {
                expected: K::Element::VALUE_TYPE,
                actual: header.value_type,
            });
        }
        if header.dimensions() != (self.bins(), self.beams()) {
            return Err(Error::InvalidDimensions {
                expected: (self.bins(), self.beams()),
                actual: (header.num_elements, header.element_multiplier),
            });
        }

        check_len::<K::Element>(&header, buf)?;

        let mut staged = self.values.clone();
        let mut offset = header.size();
        for bin in 0..self.bins() {
            for beam in 0..self.beams() {
                staged[[bin, beam]] = K::Element::read(buf, offset)?;
                offset += K::Element::WIDTH;
            }
        }
        Ok(staged)
    }

    /// Encode header and payload in the same layout [Grid::decode] reads.
    ///
    /// # Errors
    /// [Error::DimensionOverflow] if the bin or beam count does not fit in the header.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let header =
            DatasetHeader::new(K::Element::VALUE_TYPE, self.bins(), self.beams(), K::NAME)?;
        let mut buf = header.encode();
        buf.reserve(self.values.len() * K::Element::WIDTH);
        for row in self.values.rows() {
            for value in row {
                buf.extend_from_slice(&value.write());
            }
        }
        trace!(
            dataset = K::NAME.trim_end_matches('\0'),
            bytes = buf.len(),
            "encoded dataset"
        );
        Ok(buf)
    }

    /// Return true if every beam at `bin` is at least `threshold`.
    ///
    /// A single beam below the threshold makes the whole bin bad. Bins outside the grid
    /// are never good.
    #[must_use]
    pub fn is_good_bin(&self, bin: usize, threshold: K::Element) -> bool {
        match self.bin(bin) {
            Some(row) => row.iter().all(|v| *v >= threshold),
            None => false,
        }
    }
}
