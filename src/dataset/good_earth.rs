use super::{DatasetKind, Grid};
use crate::pd0::PD0_BAD_COUNT;

/// Number of good pings per bin after transformation to earth coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GoodEarth;

pub type GoodEarthGrid = Grid<GoodEarth>;

impl DatasetKind for GoodEarth {
    type Element = i32;

    const NAME: &'static str = "E000007\0";
    const CSV_TAG: &'static str = "GoodEarth";
    const PD0_BAD: i32 = PD0_BAD_COUNT;

    fn pd0_count(value: i32, _target_beam: usize, _repeat_factor: f64) -> i32 {
        value
    }
}
