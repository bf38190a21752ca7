//! Error types for configuration validation.

use thiserror::Error;

/// Errors detected while validating a simulation configuration.
///
/// All of these are raised before the first frame is computed; the per-frame
/// pipeline itself never fails (numerical oddities are recovered locally and
/// logged instead).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("grid must be at least 2x2 to form a strip, got {rows}x{cols}")]
    GridTooSmall { rows: usize, cols: usize },

    #[error("lattice spacing must be positive, got ({x}, {y})")]
    NonPositiveSpacing { x: f32, y: f32 },

    #[error("time step must be positive, got {0}")]
    NonPositiveTimeStep(f32),

    #[error("wave bank is empty")]
    EmptyWaveBank,

    #[error("wave {index}: wavelength must be positive, got {value}")]
    NonPositiveWavelength { index: usize, value: f32 },

    #[error("wave {index}: amplitude must be non-negative, got {value}")]
    NegativeAmplitude { index: usize, value: f32 },
}
