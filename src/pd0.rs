//! Conversion of dataset values to PD0 counts and PD0 beam order.
//!
//! PD0 numbers its beams differently from the source instrument:
//!
//! |PD0 beam|source beam|
//! |---|---|
//! |0|3|
//! |1|2|
//! |2|0|
//! |3|1|
use tracing::debug;

use crate::dataset::{DatasetKind, Element, Grid};

/// Source beam read for each PD0 beam.
pub const PD0_SOURCE_BEAM: [usize; 4] = [3, 2, 0, 1];

/// PD0 value for bad velocity data.
pub const PD0_BAD_VELOCITY: i32 = -32768;
/// PD0 value for bad count data (correlation, echo intensity, percent good), i.e., no
/// signal.
pub const PD0_BAD_COUNT: i32 = 0;

/// Scale factor derived from the number of code repeats.
///
/// Non-positive repeat counts are treated as a factor of 1.
#[must_use]
pub fn repeat_factor(code_repeats: i32) -> f64 {
    if code_repeats <= 0 {
        1.0
    } else {
        f64::from(code_repeats) / 2.0
    }
}

/// Round half to even and convert to a count.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_count(value: f64) -> i32 {
    value.round_ties_even() as i32
}

/// Source beam for `target_beam`, or `None` if PD0 has no such beam.
#[must_use]
pub fn source_beam(target_beam: usize) -> Option<usize> {
    PD0_SOURCE_BEAM.get(target_beam).copied()
}

impl<K: DatasetKind> Grid<K> {
    /// PD0 counts for PD0 beam `target_beam`, one per bin in bin order.
    ///
    /// Cells holding the bad value sentinel are written as [DatasetKind::PD0_BAD].
    ///
    /// Returns `None` when the conversion does not apply, i.e., `target_beam` is not a PD0
    /// beam or the source beam it maps to is not present in this grid.
    #[must_use]
    pub fn pd0_counts(&self, code_repeats: i32, target_beam: usize) -> Option<Vec<i32>> {
        let Some(column) = source_beam(target_beam).and_then(|beam| self.beam(beam)) else {
            debug!(
                dataset = K::NAME.trim_end_matches('\0'),
                target_beam,
                beams = self.beams(),
                "no PD0 beam mapping for dataset"
            );
            return None;
        };
        let rf = repeat_factor(code_repeats);
        Some(
            column
                .iter()
                .map(|v| {
                    if v.is_bad() {
                        K::PD0_BAD
                    } else {
                        K::pd0_count(*v, target_beam, rf)
                    }
                })
                .collect(),
        )
    }
}

/// Scale a value by `factor` and round to counts.
pub(crate) fn scaled<E: Element>(value: E, factor: f64) -> i32 {
    round_count(value.to_f64() * factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{CorrelationGrid, GoodEarthGrid};
    use test_case::test_case;

    #[test_case(-3, 1.0)]
    #[test_case(0, 1.0)]
    #[test_case(1, 0.5)]
    #[test_case(2, 1.0)]
    #[test_case(3, 1.5)]
    #[test_case(8, 4.0)]
    fn test_repeat_factor(code_repeats: i32, expected: f64) {
        assert_eq!(repeat_factor(code_repeats), expected);
    }

    #[test_case(63.75, 64)]
    #[test_case(127.5, 128)]
    #[test_case(382.5, 382; "ties to even down")]
    #[test_case(383.5, 384; "ties to even up")]
    #[test_case(-0.4, 0)]
    fn test_round_count(value: f64, expected: i32) {
        assert_eq!(round_count(value), expected);
    }

    #[test]
    fn beam_remap() {
        let mut grid = GoodEarthGrid::new(2, 4);
        for bin in 0..2 {
            for beam in 0..4 {
                grid.set(bin, beam, (bin * 10 + beam) as i32);
            }
        }

        assert_eq!(grid.pd0_counts(0, 0), Some(vec![3, 13]));
        assert_eq!(grid.pd0_counts(0, 1), Some(vec![2, 12]));
        assert_eq!(grid.pd0_counts(0, 2), Some(vec![0, 10]));
        assert_eq!(grid.pd0_counts(0, 3), Some(vec![1, 11]));
    }

    #[test]
    fn unsupported_target_beam_is_absent() {
        let grid = CorrelationGrid::new(3, 4);
        assert_eq!(grid.pd0_counts(0, 4), None);
        assert_eq!(grid.pd0_counts(0, usize::MAX), None);

        // vertical beam only; PD0 beam 2 reads source beam 0
        let grid = CorrelationGrid::new(3, 1);
        assert_eq!(grid.pd0_counts(0, 0), None);
        assert_eq!(grid.pd0_counts(0, 2).map(|c| c.len()), Some(3));
    }

    #[test]
    fn no_bins_gives_no_counts() {
        let grid = CorrelationGrid::new(0, 4);
        assert_eq!(grid.pd0_counts(2, 1), Some(vec![]));
    }
}
