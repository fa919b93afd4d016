use super::{DatasetKind, Grid};
use crate::pd0::{scaled, PD0_BAD_COUNT};

/// Per bin, per beam correlation magnitude.
///
/// Values are fractions, `0.0` to `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Correlation;

pub type CorrelationGrid = Grid<Correlation>;

impl DatasetKind for Correlation {
    type Element = f32;

    const NAME: &'static str = "E000005\0";
    const CSV_TAG: &'static str = "Corr";
    const PD0_BAD: i32 = PD0_BAD_COUNT;

    /// PD0 correlation is 0-255 counts. Beam 0 is scaled differently from the other beams
    /// and only the others depend on the code repeats.
    fn pd0_count(value: f32, target_beam: usize, repeat_factor: f64) -> i32 {
        if target_beam == 0 {
            scaled(value, 255.0)
        } else {
            scaled(value, 127.5 * repeat_factor)
        }
    }
}
