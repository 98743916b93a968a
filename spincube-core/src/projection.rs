//! Camera and perspective projection onto the character grid
use nalgebra::{Point2, Point3};

/// Integer screen position; x is the column, y is the row (downward)
pub type ScreenPoint = Point2<i32>;

/// Smallest depth allowed in the perspective divide
pub const MIN_DEPTH: f32 = 1e-3;

/// Perspective camera looking down -Z from `z`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Distance from the eye to the projection plane
    pub distance: f32,
    /// Camera position on the Z axis
    pub z: f32,
    /// Horizontal stretch compensating for tall terminal cells
    pub x_scale: f32,
}

impl Camera {
    pub fn new(distance: f32, z: f32, x_scale: f32) -> Self {
        Self { distance, z, x_scale }
    }

    /// Perspective factor for a point at depth `z`.
    ///
    /// Points at or behind the eye are pinned to `MIN_DEPTH` so the
    /// projection flattens them instead of diverging.
    pub fn perspective(&self, z: f32) -> f32 {
        self.distance / (self.z - z).max(MIN_DEPTH)
    }

    /// Project a rotated point to the screen, truncating toward zero
    pub fn project_point(&self, point: &Point3<f32>, scale: i32, center: ScreenPoint) -> ScreenPoint {
        let scale = scale as f32;
        let perspective = self.perspective(point.z);
        let x = (point.x * scale * perspective * self.x_scale) as i32;
        let y = (-point.y * scale * perspective) as i32;
        ScreenPoint::new(x.saturating_add(center.x), y.saturating_add(center.y))
    }

    /// Project every rotated vertex into `out`, which must be the same length
    pub fn project_into(
        &self,
        rotated: &[Point3<f32>],
        scale: i32,
        center: ScreenPoint,
        out: &mut [ScreenPoint],
    ) {
        debug_assert_eq!(rotated.len(), out.len());
        for (projected, point) in out.iter_mut().zip(rotated) {
            *projected = self.project_point(point, scale, center);
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(5.0, 10.0, 2.0)
    }
}
