//! Surface-of-revolution generation.
//!
//! Revolves a 2D profile curve around the vertical axis to produce a
//! solid, the way the torso is generated from its control-point profile.

use nalgebra::{Point2, Point3, Vector3};

use crate::error::{MeshError, MeshResult};
use crate::mesh::{TriMesh, Vertex};

/// Default number of segments around the axis of revolution.
pub const DEFAULT_SEGMENTS: usize = 24;

/// Generate a surface of revolution from a profile curve.
///
/// Each profile point is `(radius, height)`; the curve is revolved around
/// the +Z axis. The surface is left open at both ends — profiles are
/// expected to start near the axis, which closes the bottom visually.
///
/// # Errors
///
/// Returns an error if:
/// - Fewer than 2 profile points are provided
/// - Fewer than 3 segments are requested
/// - Any radius is negative or non-finite
///
/// # Example
///
/// ```
/// use avatar_mesh::{revolve, DEFAULT_SEGMENTS};
/// use nalgebra::Point2;
///
/// // A simple cone profile.
/// let profile = vec![Point2::new(0.01, 0.0), Point2::new(0.5, 1.0)];
/// let mesh = revolve(&profile, DEFAULT_SEGMENTS).unwrap();
///
/// assert_eq!(mesh.vertex_count(), 2 * DEFAULT_SEGMENTS);
/// assert_eq!(mesh.face_count(), DEFAULT_SEGMENTS * 2);
/// ```
pub fn revolve(profile: &[Point2<f64>], segments: usize) -> MeshResult<TriMesh> {
    if profile.len() < 2 {
        return Err(MeshError::TooFewProfilePoints {
            min: 2,
            actual: profile.len(),
        });
    }

    if segments < 3 {
        return Err(MeshError::TooFewSegments {
            min: 3,
            actual: segments,
        });
    }

    for point in profile {
        if point.x < 0.0 || !point.x.is_finite() {
            return Err(MeshError::InvalidRadius(point.x));
        }
    }

    // In-plane normal per profile point: perpendicular to the averaged
    // direction of the adjacent profile edges, pointing away from the axis.
    let plane_normals = profile_normals(profile);

    let n_rings = profile.len();
    let mut mesh = TriMesh::with_capacity(n_rings * segments, (n_rings - 1) * segments * 2);

    for (ring_idx, (point, plane_normal)) in profile.iter().zip(plane_normals.iter()).enumerate() {
        for seg_idx in 0..segments {
            #[allow(clippy::cast_precision_loss)]
            // Segment counts are tiny; the cast is exact.
            let angle = 2.0 * std::f64::consts::PI * (seg_idx as f64) / (segments as f64);
            let cos_a = angle.cos();
            let sin_a = angle.sin();

            let position = Point3::new(point.x * cos_a, point.x * sin_a, point.y);
            let normal = Vector3::new(plane_normal.x * cos_a, plane_normal.x * sin_a, plane_normal.y);
            mesh.vertices.push(Vertex::new(position, normal));

            // Two triangles per quad between this ring and the next.
            if ring_idx < n_rings - 1 {
                #[allow(clippy::cast_possible_truncation)]
                // Ring and segment counts stay far below u32::MAX.
                let (curr, next_seg, next_ring, next_both) = (
                    (ring_idx * segments + seg_idx) as u32,
                    (ring_idx * segments + (seg_idx + 1) % segments) as u32,
                    ((ring_idx + 1) * segments + seg_idx) as u32,
                    ((ring_idx + 1) * segments + (seg_idx + 1) % segments) as u32,
                );

                mesh.faces.push([curr, next_ring, next_seg]);
                mesh.faces.push([next_seg, next_ring, next_both]);
            }
        }
    }

    Ok(mesh)
}

/// Per-point outward normals in the (radius, height) plane.
fn profile_normals(profile: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let edge_normal = |a: Point2<f64>, b: Point2<f64>| {
        let d = b - a;
        let len = d.norm();
        if len < f64::EPSILON {
            // Degenerate edge; fall back to a radial normal.
            Point2::new(1.0, 0.0)
        } else {
            // Rotate the edge tangent a quarter turn so it points away
            // from the axis for a profile traversed bottom to top.
            Point2::new(d.y / len, -d.x / len)
        }
    };

    (0..profile.len())
        .map(|i| {
            let before = i.checked_sub(1).map(|j| edge_normal(profile[j], profile[i]));
            let after = profile.get(i + 1).map(|&next| edge_normal(profile[i], next));

            let summed = match (before, after) {
                (Some(a), Some(b)) => Point2::new(a.x + b.x, a.y + b.y),
                (Some(n), None) | (None, Some(n)) => n,
                (None, None) => Point2::new(1.0, 0.0),
            };

            let len = summed.coords.norm();
            if len < f64::EPSILON {
                Point2::new(1.0, 0.0)
            } else {
                Point2::new(summed.x / len, summed.y / len)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cylinder_profile() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.5, 0.0),
            Point2::new(0.5, 0.5),
            Point2::new(0.5, 1.0),
        ]
    }

    #[test]
    fn test_vertex_and_face_counts() {
        let mesh = revolve(&cylinder_profile(), 16).unwrap();
        assert_eq!(mesh.vertex_count(), 3 * 16);
        assert_eq!(mesh.face_count(), 2 * 16 * 2);
    }

    #[test]
    fn test_ring_radius_matches_profile() {
        let mesh = revolve(&cylinder_profile(), 8).unwrap();
        for vertex in &mesh.vertices {
            let radial = vertex.position.xy().coords.norm();
            assert_relative_eq!(radial, 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ring_heights_match_profile() {
        let profile = cylinder_profile();
        let mesh = revolve(&profile, 8).unwrap();
        for (i, vertex) in mesh.vertices.iter().enumerate() {
            let ring = i / 8;
            assert_relative_eq!(vertex.position.z, profile[ring].y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cylinder_normals_are_radial() {
        let mesh = revolve(&cylinder_profile(), 12).unwrap();
        for vertex in &mesh.vertices {
            // A straight-sided profile has purely horizontal normals.
            assert_relative_eq!(vertex.normal.z, 0.0, epsilon = 1e-12);
            assert_relative_eq!(vertex.normal.norm(), 1.0, epsilon = 1e-12);

            // Pointing away from the axis.
            let radial = vertex.position.xy().coords;
            assert!(vertex.normal.xy().dot(&radial) > 0.0);
        }
    }

    #[test]
    fn test_face_indices_in_range() {
        let mesh = revolve(&cylinder_profile(), 5).unwrap();
        let max = u32::try_from(mesh.vertex_count()).unwrap();
        for face in &mesh.faces {
            assert!(face.iter().all(|&i| i < max));
        }
    }

    #[test]
    fn test_too_few_points() {
        let err = revolve(&[Point2::new(0.5, 0.0)], 8).unwrap_err();
        assert!(matches!(err, MeshError::TooFewProfilePoints { min: 2, actual: 1 }));
    }

    #[test]
    fn test_too_few_segments() {
        let err = revolve(&cylinder_profile(), 2).unwrap_err();
        assert!(matches!(err, MeshError::TooFewSegments { min: 3, actual: 2 }));
    }

    #[test]
    fn test_negative_radius_rejected() {
        let profile = vec![Point2::new(-0.1, 0.0), Point2::new(0.5, 1.0)];
        assert!(matches!(
            revolve(&profile, 8),
            Err(MeshError::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_nan_radius_rejected() {
        let profile = vec![Point2::new(f64::NAN, 0.0), Point2::new(0.5, 1.0)];
        assert!(matches!(
            revolve(&profile, 8),
            Err(MeshError::InvalidRadius(_))
        ));
    }
}
