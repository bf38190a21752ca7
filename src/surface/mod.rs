//! Water surface simulation.
//!
//! The vertex lattice, wave displacement, lighting normals, and
//! triangle-strip packing each live in their own submodule; the system
//! module ties them into a per-tick rebuild pipeline.

mod grid;
mod heights;
mod normals;
mod strip;
mod system;

pub use grid::SurfaceGrid;
pub use heights::update_heights;
pub use normals::update_normals;
pub use strip::StripBuffers;
pub use system::SurfaceSystem;
