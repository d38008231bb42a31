//! Scene types for the glint ray tracer.
//!
//! A scene is plain value data: analytic primitives (spheres and infinite
//! planes) carrying flat surface attributes, plus optional point lights for
//! the local-illumination shading variant. A render pass borrows the scene
//! immutably; interactive embedders mutate fields between passes.

use glint_math::{Ray, Vec3};
use serde::{Deserialize, Serialize};

/// How close to zero `dot(normal, direction)` may get before a ray counts
/// as parallel to a plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Flat surface attributes shared by every primitive kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    /// Base color (RGB, conventionally in [0, 1]; not clamped at storage time)
    pub color: Vec3,

    /// Mirror reflectivity, expected in [0, 1]. Interactive controls may push
    /// it out of range; the renderer saturates out-of-range results at the
    /// final clamp instead of validating here.
    pub reflectivity: f32,
}

impl Surface {
    /// Create surface attributes from a color and a reflectivity factor.
    pub fn new(color: Vec3, reflectivity: f32) -> Self {
        Self {
            color,
            reflectivity,
        }
    }
}

/// A sphere primitive.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Sphere {
    /// Center position in world space
    pub center: Vec3,

    /// Radius, expected > 0 (not validated)
    pub radius: f32,

    /// Surface attributes
    pub surface: Surface,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, surface: Surface) -> Self {
        Self {
            center,
            radius,
            surface,
        }
    }

    /// Ray parameter of the nearest forward intersection, or `None`.
    ///
    /// Solves the quadratic `|origin + t*direction - center|^2 = radius^2`
    /// and considers the smaller root only: a ray starting inside the sphere
    /// reports no hit, since its near root lies behind the origin and there
    /// is no fallback to the far root.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        if t < 0.0 {
            return None;
        }
        Some(t)
    }

    /// Outward surface normal at a point on the sphere.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}

/// An infinite plane primitive.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Plane {
    /// Any point on the plane
    pub point: Vec3,

    /// Unit-length plane normal
    pub normal: Vec3,

    /// Surface attributes
    pub surface: Surface,
}

impl Plane {
    /// Create a new plane. `normal` is normalized here and must be non-zero.
    pub fn new(point: Vec3, normal: Vec3, surface: Surface) -> Self {
        Self {
            point,
            normal: normal.normalize(),
            surface,
        }
    }

    /// Ray parameter of the forward intersection, or `None`.
    ///
    /// Rays within `PARALLEL_EPSILON` of parallel never hit.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denom;
        if t < 0.0 {
            return None;
        }
        Some(t)
    }

    /// Surface normal at a point on the plane (constant everywhere).
    pub fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }
}

/// A point light for the local-illumination shading variant.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Light {
    /// Position in world space
    pub position: Vec3,

    /// Light color; doubles as intensity (white = full strength)
    pub color: Vec3,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}

/// Reference to a primitive inside a scene.
///
/// A closed two-variant enum rather than a trait object: the nearest-hit
/// scan dispatches on the tag, and the set of primitive kinds is fixed.
#[derive(Clone, Copy, Debug)]
pub enum PrimitiveRef<'a> {
    Sphere(&'a Sphere),
    Plane(&'a Plane),
}

impl PrimitiveRef<'_> {
    /// Outward surface normal at a point on the primitive.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            PrimitiveRef::Sphere(sphere) => sphere.normal_at(point),
            PrimitiveRef::Plane(plane) => plane.normal_at(point),
        }
    }

    /// Surface attributes of the primitive.
    pub fn surface(&self) -> Surface {
        match self {
            PrimitiveRef::Sphere(sphere) => sphere.surface,
            PrimitiveRef::Plane(plane) => plane.surface,
        }
    }
}

/// A ray-scene intersection: which primitive was hit, and at which ray
/// parameter.
#[derive(Clone, Copy, Debug)]
pub struct Hit<'a> {
    /// The primitive that was hit
    pub primitive: PrimitiveRef<'a>,

    /// Ray parameter of the intersection point
    pub t: f32,
}

/// A complete scene: spheres, planes, and optional point lights.
///
/// Insertion order does not affect the rendered result; it only fixes the
/// iteration order of the nearest-hit scan, keeping renders deterministic.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub spheres: Vec<Sphere>,

    #[serde(default)]
    pub planes: Vec<Plane>,

    #[serde(default)]
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere to the scene.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Add a plane to the scene.
    pub fn add_plane(&mut self, plane: Plane) {
        self.planes.push(plane);
    }

    /// Add a point light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Total number of primitives.
    pub fn primitive_count(&self) -> usize {
        self.spheres.len() + self.planes.len()
    }

    /// Check if the scene contains no primitives.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty() && self.planes.is_empty()
    }

    /// Find the nearest forward intersection along `ray`.
    ///
    /// Linear scan over all spheres, then all planes, keeping the smallest
    /// valid `t`; exact ties keep the first primitive found. No spatial
    /// index - cost is O(primitives) per ray.
    pub fn find_nearest(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut nearest: Option<Hit<'_>> = None;
        let mut nearest_t = f32::MAX;

        for sphere in &self.spheres {
            if let Some(t) = sphere.intersect(ray) {
                if t < nearest_t {
                    nearest_t = t;
                    nearest = Some(Hit {
                        primitive: PrimitiveRef::Sphere(sphere),
                        t,
                    });
                }
            }
        }

        for plane in &self.planes {
            if let Some(t) = plane.intersect(ray) {
                if t < nearest_t {
                    nearest_t = t;
                    nearest = Some(Hit {
                        primitive: PrimitiveRef::Plane(plane),
                        t,
                    });
                }
            }
        }

        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn grey() -> Surface {
        Surface::new(Vec3::new(0.5, 0.5, 0.5), 0.0)
    }

    /// Random vector with components in [-5, 5], rejecting near-zero results
    /// so it is safe to normalize.
    fn random_vec(rng: &mut StdRng) -> Vec3 {
        loop {
            let v = Vec3::new(
                rng.gen::<f32>() * 10.0 - 5.0,
                rng.gen::<f32>() * 10.0 - 5.0,
                rng.gen::<f32>() * 10.0 - 5.0,
            );
            if v.length_squared() > 0.01 {
                return v;
            }
        }
    }

    #[test]
    fn test_sphere_hit_distance() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let t = sphere.intersect(&ray).expect("ray aims at the sphere");
        assert!((t - 4.0).abs() < 1e-4);

        // The hit point lies on the sphere's surface.
        let hit = ray.at(t);
        assert!(((hit - sphere.center).length() - sphere.radius).abs() < 1e-4);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn test_sphere_behind_ray_is_a_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn test_ray_from_inside_a_sphere_is_a_miss() {
        // Only the near quadratic root is considered, and for an interior
        // origin it lies behind the ray.
        let sphere = Sphere::new(Vec3::ZERO, 2.0, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(sphere.intersect(&ray), None);

        let off_center = Ray::new(Vec3::new(0.5, 0.3, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(sphere.intersect(&off_center), None);
    }

    #[test]
    fn test_sphere_hits_lie_on_the_surface() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let center = random_vec(&mut rng);
            let radius = rng.gen::<f32>() * 2.0 + 0.1;
            let sphere = Sphere::new(center, radius, grey());

            // Aim at the center from a point guaranteed to be outside.
            let origin = center + random_vec(&mut rng).normalize() * (radius + 5.0);
            let ray = Ray::new(origin, center - origin);

            let t = sphere.intersect(&ray).expect("ray through center hits");
            let hit = ray.at(t);
            assert!(
                ((hit - center).length() - radius).abs() < 1e-3,
                "hit point {} is off the sphere surface",
                hit
            );
        }
    }

    #[test]
    fn test_sphere_normal_points_outward() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, grey());
        let normal = sphere.normal_at(Vec3::new(0.0, 0.0, -4.0));
        assert!((normal - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_plane_hit_distance() {
        let plane = Plane::new(Vec3::new(0.0, -2.0, 0.0), Vec3::new(0.0, 1.0, 0.0), grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));

        let t = plane.intersect(&ray).expect("ray aims at the plane");
        assert!((t - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_plane_parallel_ray_is_a_miss() {
        let plane = Plane::new(Vec3::new(0.0, -2.0, 0.0), Vec3::new(0.0, 1.0, 0.0), grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(plane.intersect(&ray), None);
    }

    #[test]
    fn test_plane_behind_ray_is_a_miss() {
        let plane = Plane::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 1.0, 0.0), grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(plane.intersect(&ray), None);
    }

    #[test]
    fn test_plane_hits_lie_on_the_plane() {
        let mut rng = StdRng::seed_from_u64(7);
        let plane = Plane::new(
            Vec3::new(1.0, -2.0, 3.0),
            Vec3::new(0.3, 1.0, -0.2),
            grey(),
        );

        for _ in 0..100 {
            let ray = Ray::new(random_vec(&mut rng), random_vec(&mut rng));
            if let Some(t) = plane.intersect(&ray) {
                let hit = ray.at(t);
                // Tolerance scales with distance: shallow rays hit far away,
                // where absolute float error grows with the coordinates.
                assert!(
                    (plane.point - hit).dot(plane.normal).abs() < 1e-3 * (1.0 + t),
                    "hit point {} is off the plane",
                    hit
                );
            }
        }
    }

    #[test]
    fn test_plane_constructor_normalizes_normal() {
        let plane = Plane::new(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0), grey());
        assert_eq!(plane.normal, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_find_nearest_picks_the_closest_primitive() {
        let mut scene = Scene::new();
        // Sphere behind the plane along the same ray.
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, -6.0),
            1.0,
            Surface::new(Vec3::new(1.0, 0.0, 0.0), 0.0),
        ));
        scene.add_plane(Plane::new(
            Vec3::new(0.0, 0.0, -3.0),
            Vec3::new(0.0, 0.0, 1.0),
            Surface::new(Vec3::new(0.0, 1.0, 0.0), 0.0),
        ));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.find_nearest(&ray).expect("ray hits both primitives");

        assert!((hit.t - 3.0).abs() < 1e-4);
        assert!(matches!(hit.primitive, PrimitiveRef::Plane(_)));
        assert_eq!(hit.primitive.surface().color, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_find_nearest_scans_every_sphere() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 0.0, -9.0), 1.0, grey()));
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, -4.0),
            1.0,
            Surface::new(Vec3::new(0.0, 0.0, 1.0), 0.0),
        ));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.find_nearest(&ray).expect("ray hits both spheres");

        assert!((hit.t - 3.0).abs() < 1e-4);
        assert_eq!(hit.primitive.surface().color, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_find_nearest_on_empty_scene() {
        let scene = Scene::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(scene.find_nearest(&ray).is_none());
        assert!(scene.is_empty());
        assert_eq!(scene.primitive_count(), 0);
    }

    #[test]
    fn test_scene_assembly() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, grey()));
        scene.add_plane(Plane::new(Vec3::ZERO, Vec3::Y, grey()));
        scene.add_light(Light::new(Vec3::new(2.0, 5.0, -3.0), Vec3::ONE));

        assert_eq!(scene.primitive_count(), 2);
        assert_eq!(scene.lights.len(), 1);
        assert!(!scene.is_empty());
    }
}
