//! The 3x3x3 lattice of cubie transforms.
//!
//! Slots are fixed addresses `(0..3)^3` into a flat 27-element array; after
//! turns have executed, a slot no longer corresponds to a fixed spatial
//! region, only to whichever cubie the turn bookkeeping last assigned to it.
//! Free rotation moves every cubie uniformly and never reassigns slots.

use glam::{Quat, Vec3};

use crate::transform::CubieTransform;

/// Grid dimension per axis.
pub const DIM: usize = 3;

/// Total number of cubies in the lattice.
pub const NUM_CUBIES: usize = DIM * DIM * DIM;

/// World distance between neighboring grid offsets (cubie extent plus gap).
pub const CELL_SPACING: f32 = 1.05;

/// Angular speed of the free-look rotation, radians per second.
pub const FREE_ROTATION_SPEED: f32 = std::f32::consts::FRAC_PI_2;

/// Slot inspected by the textual debug dump.
pub const REFERENCE_SLOT: usize = coord_to_idx(2, 1, 2);

/// Converts (x, y, z) slot coordinates to a linear slot index.
///
/// Index order is x-major: `idx = x * DIM * DIM + y * DIM + z`.
#[inline(always)]
pub const fn coord_to_idx(x: usize, y: usize, z: usize) -> usize {
    x * DIM * DIM + y * DIM + z
}

/// Converts a linear slot index to (x, y, z) slot coordinates.
#[inline(always)]
pub const fn idx_to_coord(slot: usize) -> (usize, usize, usize) {
    (slot / (DIM * DIM), (slot / DIM) % DIM, slot % DIM)
}

/// Owns the 27 cubie transforms, addressed by slot index.
#[derive(Debug, Clone)]
pub struct CubeLattice {
    cubies: [CubieTransform; NUM_CUBIES],
}

impl CubeLattice {
    /// Creates the solved lattice: identity orientations, one cubie per
    /// grid offset centered around the origin.
    pub fn new() -> Self {
        let cubies = std::array::from_fn(|slot| {
            let (x, y, z) = idx_to_coord(slot);
            CubieTransform::at(Vec3::new(
                (x as f32 - 1.0) * CELL_SPACING,
                (y as f32 - 1.0) * CELL_SPACING,
                (z as f32 - 1.0) * CELL_SPACING,
            ))
        });
        Self { cubies }
    }

    /// Restores every slot to its starting transform.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The transform currently stored in `slot`.
    pub fn cubie(&self, slot: usize) -> &CubieTransform {
        &self.cubies[slot]
    }

    /// Mutable access to the transform stored in `slot`.
    pub fn cubie_mut(&mut self, slot: usize) -> &mut CubieTransform {
        &mut self.cubies[slot]
    }

    /// All 27 transforms in slot order, for the render pass.
    pub fn cubies(&self) -> &[CubieTransform; NUM_CUBIES] {
        &self.cubies
    }

    /// Applies one incremental free-look rotation to every cubie.
    ///
    /// Left-multiplies each transform by the same world-space rotation;
    /// slot assignment is untouched.
    pub fn apply_free_rotation(&mut self, delta: Quat) {
        for cubie in &mut self.cubies {
            cubie.rotate_world(delta);
        }
    }
}

impl Default for CubeLattice {
    fn default() -> Self {
        Self::new()
    }
}

/// Integrates held-direction input into this frame's free-look rotation.
///
/// `pitch` and `yaw` are -1, 0 or +1 from the directional keys. The input
/// is treated as an angular velocity and integrated by the quaternion
/// derivative `q' = 1 + dt/2 * (w_x, w_y, 0)`, then renormalized so the
/// result stays a valid rotation.
pub fn free_rotation_delta(pitch: f32, yaw: f32, delta_time: f32) -> Quat {
    let half_step = 0.5 * FREE_ROTATION_SPEED * delta_time;
    Quat::from_xyzw(pitch * half_step, yaw * half_step, 0.0, 1.0).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::EPSILON;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_coordinate_conversion_roundtrip() {
        for slot in 0..NUM_CUBIES {
            let (x, y, z) = idx_to_coord(slot);
            assert!(x < DIM && y < DIM && z < DIM);
            assert_eq!(coord_to_idx(x, y, z), slot, "Roundtrip failed for slot {slot}");
        }
    }

    #[test]
    fn test_new_lattice_sits_on_grid_offsets() {
        let lattice = CubeLattice::new();

        let corner = lattice.cubie(coord_to_idx(0, 0, 0)).position();
        assert!((corner - Vec3::splat(-CELL_SPACING)).length() < EPSILON);

        let center = lattice.cubie(coord_to_idx(1, 1, 1)).position();
        assert!(center.length() < EPSILON);

        let reference = lattice.cubie(REFERENCE_SLOT).position();
        assert!((reference - Vec3::new(CELL_SPACING, 0.0, CELL_SPACING)).length() < EPSILON);
    }

    #[test]
    fn test_free_rotation_moves_every_cubie_in_place() {
        let mut lattice = CubeLattice::new();
        let initial = lattice.clone();
        let delta = Quat::from_rotation_z(FRAC_PI_2);

        lattice.apply_free_rotation(delta);

        for slot in 0..NUM_CUBIES {
            let before = initial.cubie(slot).position();
            let expected = delta * before;
            let after = lattice.cubie(slot).position();
            assert!((after - expected).length() < EPSILON, "slot {slot} strayed");
            assert!(lattice.cubie(slot).is_orthonormal(EPSILON));
        }
    }

    #[test]
    fn test_reset_restores_starting_transforms() {
        let mut lattice = CubeLattice::new();
        let initial = lattice.clone();

        lattice.apply_free_rotation(Quat::from_rotation_x(0.7));
        lattice.reset();

        for slot in 0..NUM_CUBIES {
            assert!(lattice.cubie(slot).approx_eq(initial.cubie(slot), EPSILON));
        }
    }

    #[test]
    fn test_free_rotation_delta_is_unit_and_axis_aligned() {
        let delta = free_rotation_delta(1.0, 0.0, 0.016);
        assert!(delta.is_normalized());

        // small pitch-only steps approximate a pure x rotation
        let expected = Quat::from_rotation_x(FREE_ROTATION_SPEED * 0.016);
        assert!(delta.dot(expected).abs() > 1.0 - EPSILON);
    }

    #[test]
    fn test_free_rotation_delta_zero_input_is_identity() {
        let delta = free_rotation_delta(0.0, 0.0, 0.016);
        assert!(delta.dot(Quat::IDENTITY).abs() > 1.0 - EPSILON);
    }
}
