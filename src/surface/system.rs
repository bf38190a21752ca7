//! Frame driver tying heights, normals, and strip packing together.

use crate::error::ConfigError;
use crate::params::{SurfaceParams, WaveBank};

use super::{update_heights, update_normals, StripBuffers, SurfaceGrid};

/// Owns the lattice and rebuilds it every simulation tick.
pub struct SurfaceSystem {
    pub params: SurfaceParams,
    pub bank: WaveBank,
    pub grid: SurfaceGrid,
    pub strips: StripBuffers,
    time: f32,
}

impl SurfaceSystem {
    /// Validate the configuration and build the first frame at time zero.
    pub fn new(params: SurfaceParams, bank: WaveBank) -> Result<Self, ConfigError> {
        params.validate()?;
        bank.validate()?;

        let grid = SurfaceGrid::new(&params);
        let strips = StripBuffers::new(params.strip_count, params.strip_length);
        let mut system = Self {
            params,
            bank,
            grid,
            strips,
            time: 0.0,
        };
        system.rebuild();
        Ok(system)
    }

    /// Simulation time of the most recent frame.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advance one tick and rebuild the frame.
    pub fn advance(&mut self) {
        self.time += self.params.time_step;
        self.rebuild();
    }

    /// Recompute heights, then normals, then strip buffers at the current time.
    pub fn rebuild(&mut self) {
        update_heights(&mut self.grid, &self.bank, &self.params, self.time);
        update_normals(&mut self.grid);
        self.strips.pack(&self.grid);
    }
}
