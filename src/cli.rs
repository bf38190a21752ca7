//! Command-line argument parsing.

use clap::Parser;

use crate::params::{RecordingConfig, SurfaceParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Wavecrest")]
#[command(about = "Gerstner wave water surface animation", long_about = None)]
pub struct Args {
    /// Record the animation to PNG frames (duration in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,

    /// Lattice rows, one triangle strip per adjacent pair
    #[arg(long, value_name = "COUNT", default_value = "80")]
    pub rows: usize,

    /// Lattice columns, vertices along each row
    #[arg(long, value_name = "COUNT", default_value = "50")]
    pub cols: usize,
}

impl Args {
    /// Surface parameters with the requested lattice dimensions applied
    pub fn surface_params(&self) -> SurfaceParams {
        SurfaceParams {
            strip_count: self.rows,
            strip_length: self.cols,
            ..SurfaceParams::default()
        }
    }

    /// Create recording configuration if recording mode is enabled
    pub fn create_recording_config(&self) -> Option<RecordingConfig> {
        self.record.map(|duration| {
            let config = RecordingConfig::new(duration);

            // Create output directories
            std::fs::create_dir_all(config.frames_dir())
                .expect("Failed to create frames directory");

            config
        })
    }
}
