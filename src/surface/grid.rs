//! Rectangular vertex lattice for the water surface.

use glam::Vec3;

use crate::params::SurfaceParams;

/// Vertex lattice covering the simulated patch of water.
///
/// Vertices sit on a fixed (x, y) lattice; animation only rewrites z.
/// The row index advances along x, the column index along y, and +z is up.
pub struct SurfaceGrid {
    rows: usize,
    cols: usize,
    /// World-space vertex positions, row-major.
    pub positions: Vec<Vec3>,
    /// Per-vertex unit normals, parallel to `positions`.
    pub normals: Vec<Vec3>,
}

impl SurfaceGrid {
    /// Build the lattice with every vertex at the base elevation.
    pub fn new(params: &SurfaceParams) -> Self {
        let rows = params.strip_count;
        let cols = params.strip_length;

        let mut positions = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                positions.push(Vec3::new(
                    params.origin[0] + row as f32 * params.spacing[0],
                    params.origin[1] + col as f32 * params.spacing[1],
                    params.base_elevation,
                ));
            }
        }

        Self {
            rows,
            cols,
            positions,
            normals: vec![Vec3::Z; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat index of the vertex at (row, col).
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    pub fn position(&self, row: usize, col: usize) -> Vec3 {
        self.positions[self.index(row, col)]
    }

    pub fn normal(&self, row: usize, col: usize) -> Vec3 {
        self.normals[self.index(row, col)]
    }
}
