//! Rotation state and the per-frame vertex transform
use nalgebra::{Matrix3, Point3};

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Rotation transform applied to the model every frame
pub struct Transform;

impl Transform {
    /// Build `Rz * Ry * Rx` from a rotation state.
    ///
    /// Each angle's sine and cosine is evaluated once and the nine
    /// coefficients are combined directly, so applying the result costs a
    /// single 3x3 multiply per vertex.
    pub fn rotation_matrix(rotation: &RotationState) -> Matrix3<f32> {
        let (sin_x, cos_x) = rotation.x.sin_cos();
        let (sin_y, cos_y) = rotation.y.sin_cos();
        let (sin_z, cos_z) = rotation.z.sin_cos();

        let cos_z_sin_y = cos_z * sin_y;
        let sin_z_sin_y = sin_z * sin_y;

        Matrix3::new(
            cos_z * cos_y,
            cos_z_sin_y * sin_x - sin_z * cos_x,
            cos_z_sin_y * cos_x + sin_z * sin_x,
            sin_z * cos_y,
            sin_z_sin_y * sin_x + cos_z * cos_x,
            sin_z_sin_y * cos_x - cos_z * sin_x,
            -sin_y,
            cos_y * sin_x,
            cos_y * cos_x,
        )
    }

    /// Rotate every vertex into `out`, which must be the same length
    pub fn rotate_into(vertices: &[Point3<f32>], rotation: &Matrix3<f32>, out: &mut [Point3<f32>]) {
        debug_assert_eq!(vertices.len(), out.len());
        for (rotated, vertex) in out.iter_mut().zip(vertices) {
            *rotated = Point3::from(rotation * vertex.coords);
        }
    }
}
