//! Wavecrest library - Gerstner wave water surface animation

pub mod camera;
pub mod error;
pub mod params;
pub mod profile;
pub mod rendering;
pub mod surface;
