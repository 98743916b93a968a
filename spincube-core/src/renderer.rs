//! Per-frame pipeline: rotate, project, cull and fill
use nalgebra::Point3;

use crate::framebuffer::FrameBuffer;
use crate::geometry::{Face, CUBE_VERTICES, VERTEX_COUNT};
use crate::projection::{Camera, ScreenPoint};
use crate::raster::{fill_triangle, is_front_face};
use crate::transform::Transform;
use crate::view::ViewState;

/// Renders the cube into a frame buffer.
///
/// Holds the per-frame vertex buffers so a frame never allocates. Faces
/// are painted in `Face::ALL` order with no depth test; back-face culling
/// alone decides visibility, which holds for a single convex solid.
pub struct Renderer {
    camera: Camera,
    rotated: [Point3<f32>; VERTEX_COUNT],
    projected: [ScreenPoint; VERTEX_COUNT],
}

impl Renderer {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            rotated: [Point3::origin(); VERTEX_COUNT],
            projected: [ScreenPoint::origin(); VERTEX_COUNT],
        }
    }

    /// Draw one frame. The buffer is resized or blanked to match the view first.
    pub fn render(&mut self, view: &ViewState, buffer: &mut FrameBuffer) {
        buffer.prepare(view.size);

        let rotation = Transform::rotation_matrix(&view.rotation);
        Transform::rotate_into(&CUBE_VERTICES, &rotation, &mut self.rotated);
        self.camera
            .project_into(&self.rotated, view.scale, view.center, &mut self.projected);

        for face in Face::ALL {
            for triangle in face.triangles() {
                let points = self.screen_triangle(triangle);
                let [a, b, c] = points;
                if is_front_face(a, b, c) {
                    fill_triangle(buffer, points, face.shade());
                }
            }
        }
    }

    /// Faces with a triangle that survived culling in the last rendered frame
    pub fn visible_faces(&self) -> Vec<Face> {
        Face::ALL
            .into_iter()
            .filter(|face| {
                face.triangles().iter().any(|&triangle| {
                    let [a, b, c] = self.screen_triangle(triangle);
                    is_front_face(a, b, c)
                })
            })
            .collect()
    }

    fn screen_triangle(&self, triangle: [usize; 3]) -> [ScreenPoint; 3] {
        triangle.map(|vertex| self.projected[vertex])
    }

    /// Screen positions from the last rendered frame
    pub fn projected(&self) -> &[ScreenPoint; VERTEX_COUNT] {
        &self.projected
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}
