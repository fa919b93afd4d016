use super::{DatasetKind, Grid};
use crate::pd0::{scaled, PD0_BAD_VELOCITY};

/// Per bin radial velocity along each beam, in m/s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BeamVelocity;

pub type BeamVelocityGrid = Grid<BeamVelocity>;

impl DatasetKind for BeamVelocity {
    type Element = f32;

    const NAME: &'static str = "E000001\0";
    const CSV_TAG: &'static str = "BeamVel";
    const PD0_BAD: i32 = PD0_BAD_VELOCITY;

    /// PD0 velocities are mm/s.
    fn pd0_count(value: f32, _target_beam: usize, _repeat_factor: f64) -> i32 {
        scaled(value, 1000.0)
    }
}
