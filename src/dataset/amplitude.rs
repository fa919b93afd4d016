use super::{DatasetKind, Grid};
use crate::pd0::{scaled, PD0_BAD_COUNT};

/// Per bin, per beam return signal amplitude in dB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Amplitude;

pub type AmplitudeGrid = Grid<Amplitude>;

impl DatasetKind for Amplitude {
    type Element = f32;

    const NAME: &'static str = "E000004\0";
    const CSV_TAG: &'static str = "Amp";
    const PD0_BAD: i32 = PD0_BAD_COUNT;

    /// PD0 echo intensity counts are 0.5 dB each.
    fn pd0_count(value: f32, _target_beam: usize, _repeat_factor: f64) -> i32 {
        scaled(value, 2.0)
    }
}
