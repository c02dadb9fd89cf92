//! Rigid transforms for individual cubies.
//!
//! Each cubie carries a 4x4 homogeneous transform: the upper-left 3x3
//! submatrix holds its orientation (orthonormal columns, the cubie's local
//! axes expressed in world space) and the fourth column holds its world
//! position. Turns compose rotations onto the transform; the whole-cube
//! free rotation multiplies from the left in world space.

use glam::{Mat4, Quat, Vec3, Vec4};

/// Tolerance for floating-point comparisons throughout the crate.
///
/// Coordinates and basis components are compared against well-separated
/// values (grid offsets, near-unit basis components), so a loose epsilon
/// is safe.
pub const EPSILON: f32 = 1e-4;

/// A rigid transform (orientation + position) for one cubie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubieTransform(Mat4);

impl CubieTransform {
    /// Creates an identity-oriented transform at the given world position.
    pub fn at(position: Vec3) -> Self {
        Self(Mat4::from_translation(position))
    }

    /// The cubie's current world position.
    pub fn position(&self) -> Vec3 {
        self.0.w_axis.truncate()
    }

    /// One column of the orientation submatrix (0 = local x, 1 = y, 2 = z).
    pub fn basis_column(&self, index: usize) -> Vec3 {
        self.0.col(index).truncate()
    }

    /// The orientation as a quaternion.
    pub fn orientation(&self) -> Quat {
        Quat::from_mat4(&self.0)
    }

    /// Rotates the cubie about one of its own local axes.
    ///
    /// Right-multiplication: the axis is interpreted in the cubie's local
    /// frame, so the world position column is left untouched.
    pub fn rotate_local(&mut self, axis: Vec3, angle: f32) {
        self.0 *= Mat4::from_axis_angle(axis, angle);
    }

    /// Rotates the cubie in world space (orientation and position together).
    pub fn rotate_world(&mut self, rotation: Quat) {
        self.0 = Mat4::from_quat(rotation) * self.0;
    }

    /// The raw homogeneous translation column.
    pub(crate) fn translation_column(&self) -> Vec4 {
        self.0.w_axis
    }

    /// Replaces the translation column, leaving the orientation alone.
    pub(crate) fn set_translation_column(&mut self, column: Vec4) {
        self.0.w_axis = column;
    }

    /// Whether the orientation submatrix is orthonormal within `tolerance`.
    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        let x = self.basis_column(0);
        let y = self.basis_column(1);
        let z = self.basis_column(2);
        (x.length() - 1.0).abs() < tolerance
            && (y.length() - 1.0).abs() < tolerance
            && (z.length() - 1.0).abs() < tolerance
            && x.dot(y).abs() < tolerance
            && y.dot(z).abs() < tolerance
            && z.dot(x).abs() < tolerance
    }

    /// Whether every matrix entry matches `other` within `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        (0..4).all(|col| {
            let difference = self.0.col(col) - other.0.col(col);
            difference.abs().max_element() < tolerance
        })
    }

    /// Formats the transform columns as a small table for the debug dump.
    pub fn format_columns(&self) -> String {
        const COLUMN_LABELS: [&str; 4] = ["x-axis", "y-axis", "z-axis", "position"];

        let mut output = String::new();
        for (index, label) in COLUMN_LABELS.iter().enumerate() {
            let column = self.0.col(index);
            output.push_str(&format!(
                "{label:<9}{:7.2}{:7.2}{:7.2}\n",
                column.x, column.y, column.z
            ));
        }
        output
    }
}
