//! Wave height evaluation over the lattice.

use crate::params::{SurfaceParams, WaveBank};
use crate::profile::{self, ProfileCurve, PROFILE_PERIOD};

use super::SurfaceGrid;

/// Per-wave terms that do not depend on the vertex.
struct WaveTerm {
    origin: [f32; 2],
    dir_tan: f32,
    dir_cos: f32,
    travel: f32,
    phase_scale: f32,
    amplitude: f32,
    curve: &'static ProfileCurve,
}

/// Rewrite every vertex's z from the wave bank at the given simulation time.
///
/// Each wave projects the vertex onto its travel direction, advances the
/// phase by `speed * time`, and samples its profile curve. The curve stores
/// the drop below the crest, so a vertex on a crest contributes the full
/// amplitude and a vertex in a trough contributes zero.
pub fn update_heights(grid: &mut SurfaceGrid, bank: &WaveBank, params: &SurfaceParams, time: f32) {
    let terms: Vec<WaveTerm> = bank
        .waves
        .iter()
        .map(|wave| WaveTerm {
            origin: wave.origin,
            dir_tan: wave.direction.tan(),
            dir_cos: wave.direction.cos(),
            travel: wave.speed * time,
            phase_scale: PROFILE_PERIOD / wave.wavelength,
            amplitude: wave.amplitude,
            curve: wave.profile.curve(),
        })
        .collect();

    for position in &mut grid.positions {
        let mut sum = 0.0;
        for term in &terms {
            let along = (position.x - term.origin[0]
                + (position.y - term.origin[1]) * term.dir_tan)
                * term.dir_cos;
            let folded = profile::fold((along + term.travel) * term.phase_scale);
            sum += term.amplitude - term.curve.sample_scaled(folded, term.amplitude);
        }
        position.z = params.base_elevation + params.height_scale * sum;
    }
}
