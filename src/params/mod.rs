//! Parameter definitions with documented units and semantics.
//!
//! All magic numbers are extracted here with:
//! - World units and ranges spelled out
//! - Defaults reproducing the classic six-wave surface
//! - Validation that runs before the pipeline is allowed to start

mod render;
mod surface;
mod waves;

// Re-export all types
pub use render::{RecordingConfig, RenderConfig};
pub use surface::SurfaceParams;
pub use waves::{WaveBank, WaveParams};
