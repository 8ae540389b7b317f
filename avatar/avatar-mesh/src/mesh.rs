//! Triangle mesh types for generated surfaces.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mesh vertex with position and outward normal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// Position in part-local coordinates.
    pub position: Point3<f64>,
    /// Unit outward normal.
    pub normal: Vector3<f64>,
}

impl Vertex {
    /// Create a vertex from position and normal.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self { position, normal }
    }
}

/// An indexed triangle mesh.
///
/// Stores vertices and faces separately, with faces referencing vertices
/// by index. Faces use **counter-clockwise winding** viewed from outside;
/// normals point outward by the right-hand rule. Coordinates are
/// right-handed with Z up.
///
/// # Example
///
/// ```
/// use avatar_mesh::{TriMesh, Vertex};
/// use nalgebra::{Point3, Vector3};
///
/// let mut mesh = TriMesh::new();
/// mesh.vertices.push(Vertex::new(Point3::origin(), Vector3::z()));
/// mesh.vertices.push(Vertex::new(Point3::new(1.0, 0.0, 0.0), Vector3::z()));
/// mesh.vertices.push(Vertex::new(Point3::new(0.0, 1.0, 0.0), Vector3::z()));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,
    /// Triangle faces as indices into the vertex array.
    pub faces: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mesh() {
        let mesh = TriMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_with_capacity_is_empty() {
        let mesh = TriMesh::with_capacity(128, 256);
        assert!(mesh.is_empty());
    }
}
