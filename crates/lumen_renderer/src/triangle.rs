//! Triangle primitive for ray tracing.
//!
//! The ray is intersected with the supporting plane, then the hit point is
//! tested against each edge with a half-plane measure. For edge `A → B` with
//! opposite vertex `C` and in-plane edge normal `en = n × (B - A)`:
//!
//! ```text
//! k = ((A - C) · en) / ((X - C) · en)
//! ```
//!
//! `k` is exactly 1 on the edge, greater than 1 between the edge and `C`,
//! and less than 1 (or negative) beyond either. The numerator is fixed per
//! edge and precomputed.

use crate::{Material, Primitive, Ray, Vec3};

struct Edge {
    /// Opposite vertex
    apex: Vec3,
    normal: Vec3,
    /// `(A - C) · en`
    reach: f32,
    exclusive: bool,
}

impl Edge {
    fn new(start: Vec3, end: Vec3, apex: Vec3, face_normal: Vec3) -> Self {
        let normal = face_normal.cross(end - start);
        Self {
            apex,
            normal,
            reach: (start - apex).dot(normal),
            exclusive: false,
        }
    }

    #[inline]
    fn contains(&self, point: Vec3) -> bool {
        let k = self.reach / (point - self.apex).dot(self.normal);
        if self.exclusive {
            k > 1.0
        } else {
            k >= 1.0
        }
    }
}

/// A flat triangle primitive.
pub struct Triangle {
    /// Vertices
    vertices: [Vec3; 3],
    /// Pre-computed face normal (unit length)
    normal: Vec3,
    /// Edges v0→v1, v1→v2, v2→v0
    edges: [Edge; 3],
    /// Material
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices, clockwise as seen from the
    /// side the normal points to. All edges are inclusive.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        let normal = (v2 - v0).cross(v1 - v0).normalize();
        let edges = [
            Edge::new(v0, v1, v2, normal),
            Edge::new(v1, v2, v0, normal),
            Edge::new(v2, v0, v1, normal),
        ];

        Self {
            vertices: [v0, v1, v2],
            normal,
            edges,
            material,
        }
    }

    /// Mark edges whose points count as outside.
    ///
    /// Two triangles sharing an edge should mark it on exactly one side so
    /// that every point on it belongs to one of them.
    pub fn with_exclusive_edges(mut self, exclusive: [bool; 3]) -> Self {
        for (edge, exclusive) in self.edges.iter_mut().zip(exclusive) {
            edge.exclusive = exclusive;
        }
        self
    }
}

impl Primitive for Triangle {
    /// Plane hit, then all three edge tests. Parallel rays miss.
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = ray.direction().dot(self.normal);
        if denom == 0.0 {
            return None;
        }

        let t = (self.vertices[0] - ray.origin()).dot(self.normal) / denom;
        let point = ray.at(t);

        self.edges
            .iter()
            .all(|edge| edge.contains(point))
            .then_some(t)
    }

    fn normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
