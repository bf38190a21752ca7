//! Triangle-strip packing of the lattice into GPU-ready buffers.

use std::ops::Range;

use super::SurfaceGrid;

/// Flat vertex buffers in triangle-strip order, one strip per row band.
///
/// Band `b` weaves rows `b` and `b + 1`: even slots take the far row
/// (`b + 1`), odd slots the near row, advancing one column every two slots.
/// Both buffers hold three f32 components per packed vertex.
pub struct StripBuffers {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    bands: usize,
    slots_per_band: usize,
}

impl StripBuffers {
    /// Size the buffers for a lattice. The lattice must be at least 2x2,
    /// which `SurfaceParams::validate` guarantees before construction.
    pub fn new(rows: usize, cols: usize) -> Self {
        debug_assert!(
            rows >= 2 && cols >= 2,
            "strip packing needs at least a 2x2 lattice, got {rows}x{cols}"
        );
        let bands = rows - 1;
        let slots_per_band = cols * 2;
        let len = bands * slots_per_band * 3;
        Self {
            positions: vec![0.0; len],
            normals: vec![0.0; len],
            bands,
            slots_per_band,
        }
    }

    /// Number of independent strips, one draw call each.
    pub fn strip_count(&self) -> usize {
        self.bands
    }

    /// Packed vertices per strip.
    pub fn strip_len(&self) -> usize {
        self.slots_per_band
    }

    /// Vertex range of one strip, in draw-call units.
    pub fn strip_span(&self, band: usize) -> Range<u32> {
        let start = (band * self.slots_per_band) as u32;
        start..start + self.slots_per_band as u32
    }

    /// Re-interleave the lattice into strip order.
    pub fn pack(&mut self, grid: &SurfaceGrid) {
        debug_assert_eq!(self.bands, grid.rows() - 1);
        debug_assert_eq!(self.slots_per_band, grid.cols() * 2);

        let mut out = 0;
        for band in 0..self.bands {
            for slot in 0..self.slots_per_band {
                let row = if slot % 2 == 0 { band + 1 } else { band };
                let col = slot / 2;

                self.positions[out..out + 3].copy_from_slice(&grid.position(row, col).to_array());
                self.normals[out..out + 3].copy_from_slice(&grid.normal(row, col).to_array());
                out += 3;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SurfaceParams;

    fn tagged_grid() -> SurfaceGrid {
        // Unit spacing from the origin makes position (row, col, 0.0)
        SurfaceGrid::new(&SurfaceParams {
            strip_count: 3,
            strip_length: 2,
            origin: [0.0, 0.0],
            spacing: [1.0, 1.0],
            ..SurfaceParams::default()
        })
    }

    #[test]
    fn test_buffer_sizes() {
        let buffers = StripBuffers::new(80, 50);
        assert_eq!(buffers.strip_count(), 79);
        assert_eq!(buffers.strip_len(), 100);
        assert_eq!(buffers.positions.len(), 79 * 100 * 3);
        assert_eq!(buffers.normals.len(), 79 * 100 * 3);
    }

    #[test]
    #[should_panic(expected = "at least a 2x2 lattice")]
    fn test_rowless_lattice_rejected() {
        StripBuffers::new(0, 2);
    }

    #[test]
    fn test_weave_order() {
        let grid = tagged_grid();
        let mut buffers = StripBuffers::new(3, 2);
        buffers.pack(&grid);

        // Band 0 alternates far row 1 and near row 0, column by column;
        // band 1 does the same over rows 2 and 1
        let xy: Vec<(f32, f32)> = buffers
            .positions
            .chunks(3)
            .map(|v| (v[0], v[1]))
            .collect();
        assert_eq!(
            xy,
            vec![
                (1.0, 0.0),
                (0.0, 0.0),
                (1.0, 1.0),
                (0.0, 1.0),
                (2.0, 0.0),
                (1.0, 0.0),
                (2.0, 1.0),
                (1.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_strip_spans_cover_buffer() {
        let buffers = StripBuffers::new(3, 2);
        assert_eq!(buffers.strip_span(0), 0..4);
        assert_eq!(buffers.strip_span(1), 4..8);
    }

    #[test]
    fn test_normals_follow_positions() {
        let mut grid = tagged_grid();
        // Tag each normal with its flat lattice index
        for (i, normal) in grid.normals.iter_mut().enumerate() {
            normal.x = i as f32;
        }
        let mut buffers = StripBuffers::new(3, 2);
        buffers.pack(&grid);

        // Slot 0 of band 0 is row 1 col 0, flat index 2
        assert_eq!(buffers.normals[0], 2.0);
        // Slot 1 is row 0 col 0, flat index 0
        assert_eq!(buffers.normals[3], 0.0);
    }

    #[test]
    fn test_repack_is_idempotent() {
        let grid = tagged_grid();
        let mut buffers = StripBuffers::new(3, 2);
        buffers.pack(&grid);
        let first = buffers.positions.clone();
        buffers.pack(&grid);
        assert_eq!(first, buffers.positions);
    }
}
