//! CSV rows for dataset grids.
//!
//! Each bin produces one line:
//!
//! ```text
//! datetime, type, subsystem code, subsystem config, bin, depth, beam 0, ..., beam N-1
//! ```
//!
//! `type` is the dataset kind's [DatasetKind::CSV_TAG] so mixed rows from one ensemble can
//! be told apart. No filtering is applied; use [Grid::is_good_bin] first if needed.
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::dataset::{DatasetKind, Grid};

/// Timestamp format of the first column.
pub const CSV_DATETIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// Per-ensemble values repeated at the start of every line.
///
/// # Example
/// ```
/// use adcp_ensemble::csv::CsvMeta;
/// use chrono::NaiveDate;
///
/// let meta = CsvMeta::builder()
///     .timestamp(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(12, 0, 0).unwrap())
///     .subsystem_code('2')
///     .blank_distance(0.5)
///     .bin_size(1.0)
///     .build();
/// assert_eq!(meta.depth(3), 3.5);
/// ```
#[derive(TypedBuilder, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CsvMeta {
    /// Ensemble date and time.
    pub timestamp: NaiveDateTime,
    /// Subsystem code, i.e., the frequency/transducer code.
    pub subsystem_code: char,
    /// Subsystem configuration index.
    #[builder(default)]
    pub subsystem_config: u8,
    /// Distance from the transducer to the start of the first bin, in meters.
    pub blank_distance: f32,
    /// Bin size, in meters.
    pub bin_size: f32,
}

impl CsvMeta {
    /// Depth of `bin`, in meters.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn depth(&self, bin: usize) -> f32 {
        self.blank_distance + bin as f32 * self.bin_size
    }
}

/// Column header line for grids with `beams` beams.
#[must_use]
pub fn csv_header(beams: usize) -> String {
    let mut line = String::from("datetime,type,ss_code,ss_config,bin,depth");
    for beam in 0..beams {
        line.push_str(&format!(",beam{beam}"));
    }
    line
}

impl<K: DatasetKind> Grid<K> {
    /// Render one CSV line per bin, in bin order.
    #[must_use]
    pub fn encode_csv(&self, meta: &CsvMeta) -> Vec<String> {
        let datetime = meta.timestamp.format(CSV_DATETIME_FORMAT).to_string();
        let mut lines = Vec::with_capacity(self.bins());
        for (bin, row) in self.values().rows().into_iter().enumerate() {
            let mut line = format!(
                "{},{},{},{},{},{}",
                datetime,
                K::CSV_TAG,
                meta.subsystem_code,
                meta.subsystem_config,
                bin,
                meta.depth(bin)
            );
            for value in row {
                line.push_str(&format!(",{value}"));
            }
            lines.push(line);
        }
        lines
    }
}
