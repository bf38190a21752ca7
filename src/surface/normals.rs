//! Per-vertex normal estimation from adjacent lattice quads.

use glam::Vec3;

use super::SurfaceGrid;

/// Components below this are treated as zero when rejecting a vector.
const COMPONENT_EPSILON: f32 = 1e-7;

/// Squared length below which a vector is rescaled before normalizing.
const LENGTH_SQ_EPSILON: f32 = 1e-7;

/// Rescue factor for very short but nonzero vectors.
const RESCUE_SCALE: f32 = 1e4;

/// Recompute every vertex normal from the current positions.
///
/// Each vertex accumulates one cross product per adjacent quad, up to four
/// for interior vertices; edges and corners use the subset that exists.
/// The operand order makes every term point toward +z on a resting surface.
/// A degenerate accumulation falls back to the up vector.
pub fn update_normals(grid: &mut SurfaceGrid) {
    let rows = grid.rows();
    let cols = grid.cols();

    for row in 0..rows {
        for col in 0..cols {
            let here = grid.position(row, col);
            let mut acc = Vec3::ZERO;

            if row > 0 {
                let up = grid.position(row - 1, col) - here;
                if col > 0 {
                    let left = grid.position(row, col - 1) - here;
                    acc += up.cross(left);
                }
                if col + 1 < cols {
                    let right = grid.position(row, col + 1) - here;
                    acc += right.cross(up);
                }
            }
            if row + 1 < rows {
                let down = grid.position(row + 1, col) - here;
                if col > 0 {
                    let left = grid.position(row, col - 1) - here;
                    acc += left.cross(down);
                }
                if col + 1 < cols {
                    let right = grid.position(row, col + 1) - here;
                    acc += down.cross(right);
                }
            }

            let index = grid.index(row, col);
            grid.normals[index] = normalize_weak(acc).unwrap_or_else(|| {
                log::warn!("degenerate normal at vertex ({row}, {col}), substituting up vector");
                Vec3::Z
            });
        }
    }
}

/// Normalize a vector that may be far below unit scale.
///
/// Returns `None` when every component is below the detection threshold.
/// A vector that is merely short is rescaled once so the final division
/// stays well conditioned in f32.
fn normalize_weak(v: Vec3) -> Option<Vec3> {
    if v.abs().max_element() < COMPONENT_EPSILON {
        return None;
    }
    let v = if v.length_squared() < LENGTH_SQ_EPSILON {
        v * RESCUE_SCALE
    } else {
        v
    };
    Some(v / v.length())
}
