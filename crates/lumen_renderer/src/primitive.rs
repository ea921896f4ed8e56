//! Primitive trait and the ordered primitive list.

use std::ops::Index;

use crate::{Material, Ray, Vec3};

/// Trait for shapes that can be intersected by rays.
pub trait Primitive: Send + Sync {
    /// Intersect the full line through `ray`.
    ///
    /// Returns `t` such that `ray.at(t)` is the first surface point, measured
    /// in multiples of the (possibly non-unit) ray direction. `t` may be
    /// negative; rejecting hits behind the origin is up to the caller.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Unit surface normal at a point on the surface.
    fn normal(&self, point: Vec3) -> Vec3;

    /// Surface material.
    fn material(&self) -> &Material;
}

/// An ordered list of primitives.
///
/// Indices are stable for the life of the list and identify primitives in
/// visibility queries.
pub struct PrimitiveList {
    objects: Vec<Box<dyn Primitive>>,
}

impl PrimitiveList {
    /// Create a new empty primitive list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Append a primitive; it gets the next index.
    pub fn add(&mut self, object: Box<dyn Primitive>) {
        self.objects.push(object);
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The primitive at `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&dyn Primitive> {
        self.objects.get(index).map(|object| object.as_ref())
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Primitive> {
        self.objects.iter().map(|object| object.as_ref())
    }
}

impl Default for PrimitiveList {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for PrimitiveList {
    type Output = dyn Primitive;

    fn index(&self, index: usize) -> &Self::Output {
        self.objects[index].as_ref()
    }
}

impl FromIterator<Box<dyn Primitive>> for PrimitiveList {
    fn from_iter<I: IntoIterator<Item = Box<dyn Primitive>>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}
