use super::{DatasetKind, Grid};
use crate::pd0::PD0_BAD_COUNT;

/// Number of good pings per bin for each beam, in beam coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GoodBeam;

pub type GoodBeamGrid = Grid<GoodBeam>;

impl DatasetKind for GoodBeam {
    type Element = i32;

    const NAME: &'static str = "E000006\0";
    const CSV_TAG: &'static str = "GoodBeam";
    const PD0_BAD: i32 = PD0_BAD_COUNT;

    fn pd0_count(value: i32, _target_beam: usize, _repeat_factor: f64) -> i32 {
        value
    }
}
