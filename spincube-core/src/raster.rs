//! Back-face culling and edge-function triangle fill
use crate::framebuffer::FrameBuffer;
use crate::projection::ScreenPoint;

/// Which side of the directed line `from -> to` the point `p` lies on
pub fn edge(from: ScreenPoint, to: ScreenPoint, p: ScreenPoint) -> i64 {
    let (fx, fy) = (from.x as i64, from.y as i64);
    (p.x as i64 - fx) * (to.y as i64 - fy) - (p.y as i64 - fy) * (to.x as i64 - fx)
}

/// Twice the signed area of the triangle in Y-down screen space
pub fn signed_area(a: ScreenPoint, b: ScreenPoint, c: ScreenPoint) -> i64 {
    -edge(a, b, c)
}

/// A triangle faces the camera when its screen-space signed area is
/// negative. Degenerate triangles are never front-facing.
pub fn is_front_face(a: ScreenPoint, b: ScreenPoint, c: ScreenPoint) -> bool {
    signed_area(a, b, c) < 0
}

/// Paint every cell inside or on the edges of a front-facing triangle
pub fn fill_triangle(buffer: &mut FrameBuffer, [a, b, c]: [ScreenPoint; 3], pixel: u8) {
    let (rows, cols) = (buffer.rows() as i64, buffer.cols() as i64);
    if rows == 0 || cols == 0 {
        return;
    }

    // Bounding box clipped to the grid
    let min_x = (a.x.min(b.x).min(c.x) as i64).max(0);
    let max_x = (a.x.max(b.x).max(c.x) as i64).min(cols - 1);
    let min_y = (a.y.min(b.y).min(c.y) as i64).max(0);
    let max_y = (a.y.max(b.y).max(c.y) as i64).min(rows - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = ScreenPoint::new(x as i32, y as i32);
            let w0 = edge(b, c, p);
            let w1 = edge(c, a, p);
            let w2 = edge(a, b, p);

            if w0 >= 0 && w1 >= 0 && w2 >= 0 {
                buffer.set(x as usize, y as usize, pixel);
            }
        }
    }
}
