//! Nearest-hit and shadow queries over a primitive list.
//!
//! Both are linear scans. Nothing here clips against a far plane.

use lumen_math::Interval;

use crate::{PrimitiveList, Ray, Vec3};

/// The primitive a ray hit and how far along the ray it was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index into the primitive list
    pub index: usize,
    /// Multiple of the ray direction
    pub t: f32,
}

/// Find the closest primitive in front of the ray origin.
///
/// `exclude` skips one primitive, normally the surface a bounce ray leaves
/// from. Hits with `t < 0` are ignored. On equal `t` the earlier primitive
/// in the list wins.
pub fn find_nearest(primitives: &PrimitiveList, ray: &Ray, exclude: Option<usize>) -> Option<Hit> {
    let mut closest = f32::INFINITY;
    let mut nearest = None;

    for (index, primitive) in primitives.iter().enumerate() {
        if exclude == Some(index) {
            continue;
        }

        let Some(t) = primitive.intersect(ray) else {
            continue;
        };

        // Strict comparison keeps the first of equal hits and drops NaN
        if Interval::FORWARD.contains(t) && t < closest {
            closest = t;
            nearest = Some(Hit { index, t });
        }
    }

    nearest
}

/// Check whether anything blocks the segment from `light` to a surface point.
///
/// `light_to_point` spans the whole segment, so an occluder sits at
/// `t ∈ [0, 1]` along it. `self_index` is the surface being lit and is
/// never its own occluder. Stops at the first occluder found.
pub fn is_occluded(
    primitives: &PrimitiveList,
    light: Vec3,
    light_to_point: Vec3,
    self_index: usize,
) -> bool {
    let ray = Ray::new(light, light_to_point);

    primitives
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != self_index)
        .any(|(_, primitive)| {
            primitive
                .intersect(&ray)
                .is_some_and(|t| Interval::UNIT.contains(t))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Material, Primitive, Sphere};

    fn sphere(center: Vec3, radius: f32, diffuse: Color) -> Box<dyn Primitive> {
        Box::new(Sphere::new(center, radius, Material::diffuse(diffuse)))
    }

    fn list(objects: Vec<Box<dyn Primitive>>) -> PrimitiveList {
        objects.into_iter().collect()
    }

    #[test]
    fn test_find_nearest_picks_closest() {
        let primitives = list(vec![
            sphere(Vec3::new(0.0, 0.0, 10.0), 1.0, Color::X),
            sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Color::Y),
        ]);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = find_nearest(&primitives, &ray, None).unwrap();
        assert_eq!(hit, Hit { index: 1, t: 4.0 });
    }

    #[test]
    fn test_find_nearest_skips_negative_t() {
        let primitives = list(vec![
            sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, Color::X),
            sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Color::Y),
        ]);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = find_nearest(&primitives, &ray, None).unwrap();
        assert_eq!(hit.index, 1);
    }

    #[test]
    fn test_find_nearest_from_inside_finds_nothing() {
        // Only the smaller root is reported, and it lies behind the origin
        let primitives = list(vec![sphere(Vec3::ZERO, 2.0, Color::X)]);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert!(find_nearest(&primitives, &ray, None).is_none());
    }

    #[test]
    fn test_find_nearest_tie_goes_to_earlier_entry() {
        let center = Vec3::new(0.0, 0.0, 5.0);
        let colors = [Color::X, Color::Y, Color::Z];
        let orders = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        for order in orders {
            let primitives = list(order.iter().map(|&i| sphere(center, 1.0, colors[i])).collect());

            let hit = find_nearest(&primitives, &ray, None).unwrap();
            assert_eq!(hit.index, 0, "order {order:?}");
            assert_eq!(primitives[hit.index].material().diffuse, colors[order[0]]);
        }
    }

    #[test]
    fn test_find_nearest_exclude() {
        let center = Vec3::new(0.0, 0.0, 5.0);
        let primitives = list(vec![
            sphere(center, 1.0, Color::X),
            sphere(center, 1.0, Color::Y),
        ]);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert_eq!(find_nearest(&primitives, &ray, Some(0)).unwrap().index, 1);
        assert_eq!(find_nearest(&primitives, &ray, Some(1)).unwrap().index, 0);
    }

    #[test]
    fn test_find_nearest_empty() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(find_nearest(&PrimitiveList::new(), &ray, None).is_none());
    }

    fn occlusion_scene(blocker: Vec3) -> PrimitiveList {
        list(vec![
            sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Color::X),
            sphere(blocker, 0.5, Color::Y),
        ])
    }

    #[test]
    fn test_occluded_by_sphere_between() {
        let primitives = occlusion_scene(Vec3::new(0.0, 0.0, 2.5));
        let point = Vec3::new(0.0, 0.0, 4.0);

        assert!(is_occluded(&primitives, Vec3::ZERO, point, 0));
    }

    #[test]
    fn test_clear_line_of_sight() {
        let primitives = occlusion_scene(Vec3::new(3.0, 0.0, 2.5));
        let point = Vec3::new(0.0, 0.0, 4.0);

        assert!(!is_occluded(&primitives, Vec3::ZERO, point, 0));
    }

    #[test]
    fn test_occluder_behind_light_or_point_is_ignored() {
        let point = Vec3::new(0.0, 0.0, 4.0);

        let behind_light = occlusion_scene(Vec3::new(0.0, 0.0, -2.0));
        assert!(!is_occluded(&behind_light, Vec3::ZERO, point, 0));

        let beyond_point = occlusion_scene(Vec3::new(0.0, 0.0, 8.0));
        assert!(!is_occluded(&beyond_point, Vec3::ZERO, point, 0));
    }

    #[test]
    fn test_surface_does_not_shadow_itself() {
        // The lit sphere is in the way of its own far side
        let primitives = occlusion_scene(Vec3::new(30.0, 0.0, 0.0));
        let far_side = Vec3::new(0.0, 0.0, 6.0);

        assert!(!is_occluded(&primitives, Vec3::ZERO, far_side, 0));
        assert!(is_occluded(&primitives, Vec3::ZERO, far_side, 1));
    }
}
