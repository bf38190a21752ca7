//! Surface lattice and simulation parameters.

use crate::error::ConfigError;

/// Static configuration of the simulated water surface.
///
/// The lattice itself never changes after initialization; only heights and
/// normals are recomputed per frame.
#[derive(Debug, Clone)]
pub struct SurfaceParams {
    /// Grid rows. Each adjacent row pair becomes one triangle strip, so
    /// `strip_count` rows produce `strip_count - 1` strips.
    pub strip_count: usize,

    /// Grid columns, i.e. vertices along one row of a strip.
    pub strip_length: usize,

    /// World (x, y) of grid point (row 0, col 0).
    pub origin: [f32; 2],

    /// Lattice step in world units: x advances per row, y per column.
    pub spacing: [f32; 2],

    /// Global multiplier applied to the summed wave height.
    pub height_scale: f32,

    /// z of a perfectly calm surface (all wave contributions zero).
    pub base_elevation: f32,

    /// Fixed simulation-time advance per frame tick (seconds).
    pub time_step: f32,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            strip_count: 80,
            strip_length: 50,
            origin: [-4.0, -2.5],
            spacing: [0.1, 0.1],
            height_scale: 1.6,
            base_elevation: 0.0,
            time_step: 0.05,
        }
    }
}

impl SurfaceParams {
    /// Check the configuration before the pipeline starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strip_count < 2 || self.strip_length < 2 {
            return Err(ConfigError::GridTooSmall {
                rows: self.strip_count,
                cols: self.strip_length,
            });
        }
        if !(self.spacing[0] > 0.0) || !(self.spacing[1] > 0.0) {
            return Err(ConfigError::NonPositiveSpacing {
                x: self.spacing[0],
                y: self.spacing[1],
            });
        }
        if !(self.time_step > 0.0) {
            return Err(ConfigError::NonPositiveTimeStep(self.time_step));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_validate() {
        assert!(SurfaceParams::default().validate().is_ok());
    }

    #[test]
    fn test_single_row_grid_rejected() {
        let mut params = SurfaceParams::default();
        params.strip_count = 1;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::GridTooSmall { rows: 1, cols: 50 })
        ));
    }

    #[test]
    fn test_zero_spacing_rejected() {
        let mut params = SurfaceParams::default();
        params.spacing = [0.0, 0.1];
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NonPositiveSpacing { .. })
        ));
    }

    #[test]
    fn test_zero_time_step_rejected() {
        let mut params = SurfaceParams::default();
        params.time_step = 0.0;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NonPositiveTimeStep(_))
        ));
    }
}
