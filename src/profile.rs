//! Gerstner wave profile tables.
//!
//! Instead of solving the trochoidal Gerstner equations per vertex, the wave
//! shape is reconstructed from two precomputed piecewise-linear curves. Each
//! curve covers half a wavelength in normalized "profile units": distances
//! [0, 200] mapping to heights [0, 50], with 0 at the crest center and 50 at
//! the trough. A full symmetric period of 400 units is obtained by folding:
//! wrap any distance into [0, 400) and mirror values above 200 as 400 - d.

/// Distance span covered by one profile curve (half a period in profile units).
pub const PROFILE_SPAN: f32 = 200.0;

/// Curve height at the end of the span, i.e. the full trough depth in
/// profile units. Lookups are rescaled by `amplitude / PROFILE_DEPTH`.
pub const PROFILE_DEPTH: f32 = 50.0;

/// Full period of the folded waveform in profile units (one wavelength).
pub const PROFILE_PERIOD: f32 = 2.0 * PROFILE_SPAN;

/// Selects one of the two built-in profile curves for a wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveProfile {
    /// Curve A: distance bunched toward the trough end, giving a flatter
    /// crest plateau and a steeper trough wall. Used by the short ripples.
    A,
    /// Curve B: more evenly spread control points, closer to a sinusoid.
    /// Used by the long swells.
    B,
}

impl WaveProfile {
    /// The curve this selector refers to.
    pub fn curve(self) -> &'static ProfileCurve {
        match self {
            WaveProfile::A => &PROFILE_A,
            WaveProfile::B => &PROFILE_B,
        }
    }
}

/// A half-period waveform shape as (distance, height) control points.
///
/// Control points are strictly increasing in distance, spanning exactly
/// [0, PROFILE_SPAN] with heights from 0 to PROFILE_DEPTH.
#[derive(Debug)]
pub struct ProfileCurve {
    points: [(f32, f32); 11],
}

/// Curve A (short ripple waves).
pub static PROFILE_A: ProfileCurve = ProfileCurve {
    points: [
        (0.0, 0.0),
        (41.8, 1.4),
        (77.5, 5.2),
        (107.6, 10.9),
        (132.4, 17.7),
        (152.3, 25.0),
        (167.9, 32.4),
        (179.8, 39.2),
        (188.6, 44.8),
        (195.0, 48.5),
        (200.0, 50.0),
    ],
};

/// Curve B (long swell waves).
pub static PROFILE_B: ProfileCurve = ProfileCurve {
    points: [
        (0.0, 0.0),
        (27.7, 1.4),
        (52.9, 5.2),
        (75.9, 10.8),
        (97.2, 17.6),
        (116.8, 25.0),
        (135.1, 32.4),
        (152.4, 39.2),
        (168.8, 44.8),
        (184.6, 48.5),
        (200.0, 50.0),
    ],
};

/// Fold an arbitrary signed profile-space distance into [0, PROFILE_SPAN].
///
/// The distance is first wrapped into one full period [0, PROFILE_PERIOD),
/// then the second half-period is mirrored back onto the first. The result
/// is continuous across the fold: distances just below and just above the
/// period midpoint land on the same curve position.
pub fn fold(distance: f32) -> f32 {
    let wrapped = distance.rem_euclid(PROFILE_PERIOD);
    if wrapped > PROFILE_SPAN {
        PROFILE_PERIOD - wrapped
    } else {
        wrapped
    }
}

impl ProfileCurve {
    /// Sample the curve at a folded distance in [0, PROFILE_SPAN].
    ///
    /// Exact hits on a control point return that point's height; between
    /// points the height is linearly interpolated. A distance at (or, in
    /// release builds, past) the end of the table returns the final control
    /// height rather than falling off the end.
    pub fn sample(&self, folded: f32) -> f32 {
        debug_assert!(
            (0.0..=PROFILE_SPAN).contains(&folded),
            "profile distance {folded} not folded into [0, {PROFILE_SPAN}]"
        );

        let (last_x, last_y) = self.points[self.points.len() - 1];
        if folded >= last_x {
            return last_y;
        }
        for pair in self.points.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            if folded == x0 {
                return y0;
            }
            if folded < x1 {
                return y0 + (y1 - y0) * (folded - x0) / (x1 - x0);
            }
        }
        last_y
    }

    /// Sample the curve and rescale from profile units to world units for a
    /// wave of the given amplitude.
    pub fn sample_scaled(&self, folded: f32, amplitude: f32) -> f32 {
        self.sample(folded) * (amplitude / PROFILE_DEPTH)
    }
}
