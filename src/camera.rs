//! Fixed oblique camera over the water surface.

use glam::{Mat4, Vec3};

use crate::params::RenderConfig;

/// Stationary camera backed away from the lattice and tilted down onto it.
///
/// The view first tilts around the x axis, then retreats along the view
/// axis, which puts the eye south of the lattice looking north across it.
pub struct Camera {
    /// Distance backed away along the view axis (world units)
    pub distance: f32,

    /// Tilt around the x axis (degrees, negative looks down)
    pub tilt_degrees: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            distance: 2.5,
            tilt_degrees: -45.0,
        }
    }
}

impl Camera {
    /// Create view-projection matrix for rendering
    ///
    /// # Returns
    /// Tuple of (view_proj_matrix, camera_position)
    pub fn create_view_proj_matrix(&self, render_config: &RenderConfig) -> (Mat4, Vec3) {
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance))
            * Mat4::from_rotation_x(self.tilt_degrees.to_radians());
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            render_config.near_plane,
            render_config.far_plane,
        );

        let eye = view.inverse().transform_point3(Vec3::ZERO);

        (proj * view, eye)
    }
}
