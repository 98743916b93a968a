//! Static cube geometry: vertex, edge and triangle tables
use nalgebra::Point3;

/// Number of cube corners
pub const VERTEX_COUNT: usize = 8;

/// Corners of the cube `[-1, 1]^3`, centered at the origin
pub const CUBE_VERTICES: [Point3<f32>; VERTEX_COUNT] = [
    Point3::new(-1.0, -1.0, 1.0),
    Point3::new(1.0, -1.0, 1.0),
    Point3::new(-1.0, 1.0, 1.0),
    Point3::new(1.0, 1.0, 1.0),
    Point3::new(-1.0, -1.0, -1.0),
    Point3::new(1.0, -1.0, -1.0),
    Point3::new(-1.0, 1.0, -1.0),
    Point3::new(1.0, 1.0, -1.0),
];

/// Wireframe edges as vertex index pairs
pub const CUBE_EDGES: [[usize; 2]; 12] = [
    // Front square
    [0, 1], [1, 3], [3, 2], [2, 0],
    // Back square
    [4, 5], [5, 7], [7, 6], [6, 4],
    // Connecting edges
    [0, 4], [1, 5], [2, 6], [3, 7],
];

/// Triangles as vertex index triples, two per face in `Face::ALL` order.
///
/// The winding is chosen so that a face pointing at the camera projects
/// with a negative signed area in Y-down screen space.
pub const CUBE_TRIANGLES: [[usize; 3]; 12] = [
    // Front
    [0, 1, 2], [1, 3, 2],
    // Back
    [5, 4, 7], [4, 6, 7],
    // Left
    [4, 0, 6], [0, 2, 6],
    // Right
    [1, 5, 3], [5, 7, 3],
    // Top
    [2, 3, 6], [3, 7, 6],
    // Bottom
    [4, 5, 0], [5, 1, 0],
];

/// One of the six cube faces, in draw order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    /// Fill character, light to heavy in draw order
    pub fn shade(self) -> u8 {
        match self {
            Face::Front => b'.',
            Face::Back => b'-',
            Face::Left => b'=',
            Face::Right => b'+',
            Face::Top => b'#',
            Face::Bottom => b'@',
        }
    }

    /// The two triangles of this face: entries `2k` and `2k + 1` of
    /// `CUBE_TRIANGLES` for the face at position `k` in `ALL`
    pub fn triangles(self) -> [[usize; 3]; 2] {
        let first = self as usize * 2;
        [CUBE_TRIANGLES[first], CUBE_TRIANGLES[first + 1]]
    }
}
