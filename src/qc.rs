//! Threshold quality control flags for dataset bins.
//!
//! Flags use the SeaDataNet quality control values. A threshold test marks a failing bin
//! [PROBABLY_BAD_VALUE]; flags from several tests are combined with [merge_flags], keeping
//! the worst flag for each bin.
use crate::dataset::{DatasetKind, Element, Grid};

pub const NO_QUALITY_CONTROL: u8 = 0;
pub const GOOD_VALUE: u8 = 1;
pub const PROBABLY_GOOD_VALUE: u8 = 2;
pub const PROBABLY_BAD_VALUE: u8 = 3;
pub const BAD_VALUE: u8 = 4;
pub const MISSING_VALUE: u8 = 9;

impl<K: DatasetKind> Grid<K> {
    /// Threshold test flags, one per bin in bin order.
    ///
    /// A bin is [GOOD_VALUE] when [Grid::is_good_bin] passes, [MISSING_VALUE] when every
    /// beam holds the bad value, and [PROBABLY_BAD_VALUE] otherwise.
    #[must_use]
    pub fn qc_flags(&self, threshold: K::Element) -> Vec<u8> {
        (0..self.bins())
            .map(|bin| {
                let missing = self
                    .bin(bin)
                    .is_some_and(|row| !row.is_empty() && row.iter().all(|v| v.is_bad()));
                if missing {
                    MISSING_VALUE
                } else if self.is_good_bin(bin, threshold) {
                    GOOD_VALUE
                } else {
                    PROBABLY_BAD_VALUE
                }
            })
            .collect()
    }
}

/// Keep the worst of `flags` and `other` in `flags`.
///
/// Only the overlapping bins are merged when the lengths differ.
pub fn merge_flags(flags: &mut [u8], other: &[u8]) {
    for (flag, new) in flags.iter_mut().zip(other) {
        *flag = (*flag).max(*new);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{AmplitudeGrid, CorrelationGrid, GoodBeamGrid};
    use test_case::test_case;

    fn correlation() -> CorrelationGrid {
        let mut grid = CorrelationGrid::new(4, 4);
        for (bin, row) in [
            [0.9, 0.95, 0.6, 0.99],
            [0.9, 0.95, 0.2, 0.99],
            [0.1, 0.1, 0.1, 0.1],
        ]
        .iter()
        .enumerate()
        {
            for (beam, v) in row.iter().enumerate() {
                grid.set(bin, beam, *v);
            }
        }
        // bin 3 never decoded
        grid
    }

    #[test]
    fn correlation_flags() {
        assert_eq!(
            correlation().qc_flags(0.5),
            vec![
                GOOD_VALUE,
                PROBABLY_BAD_VALUE,
                PROBABLY_BAD_VALUE,
                MISSING_VALUE
            ]
        );
    }

    #[test]
    fn amplitude_flags() {
        let mut grid = AmplitudeGrid::new(2, 4);
        for beam in 0..4 {
            grid.set(0, beam, 45.0);
            grid.set(1, beam, 45.0);
        }
        grid.set(1, 1, 12.0);
        assert_eq!(grid.qc_flags(20.0), vec![GOOD_VALUE, PROBABLY_BAD_VALUE]);
    }

    #[test]
    fn good_beam_flags() {
        let mut grid = GoodBeamGrid::new(2, 4);
        for beam in 0..4 {
            grid.set(0, beam, 90);
            grid.set(1, beam, 90);
        }
        grid.set(0, 2, 60);
        assert_eq!(grid.qc_flags(80), vec![PROBABLY_BAD_VALUE, GOOD_VALUE]);
    }

    #[test]
    fn no_bins_no_flags() {
        assert!(CorrelationGrid::new(0, 4).qc_flags(0.5).is_empty());
    }

    #[test_case(&[1, 1, 1], &[1, 3, 4], &[1, 3, 4]; "worst wins")]
    #[test_case(&[4, 9, 1], &[3, 3, 3], &[4, 9, 3]; "keeps worse existing")]
    #[test_case(&[1, 1, 1], &[3], &[3, 1, 1]; "shorter other")]
    fn test_merge_flags(flags: &[u8], other: &[u8], expected: &[u8]) {
        let mut flags = flags.to_vec();
        merge_flags(&mut flags, other);
        assert_eq!(flags, expected);
    }
}
