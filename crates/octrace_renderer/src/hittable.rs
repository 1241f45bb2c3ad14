//! Ray-object intersection.

use octrace_math::{Interval, Point3, Ray, Real, Vector3};

use crate::{MaterialId, MeshObject, Sphere};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Point of intersection
    pub point: Point3,
    /// Surface normal at intersection (always points against ray)
    pub normal: Vector3,
    /// Parameter t where the intersection occurs
    pub t: Real,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
    pub material: MaterialId,
}

impl HitRecord {
    /// Build a record, orienting `outward_normal` against the ray.
    pub fn new(ray: &Ray, t: Real, point: Point3, outward_normal: Vector3, material: MaterialId) -> Self {
        let mut rec = Self {
            point,
            normal: outward_normal,
            t,
            front_face: true,
            material,
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vector3) {
        self.front_face = ray.direction().dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Anything a ray can hit.
#[derive(Debug, Clone)]
pub enum Hittable {
    Sphere(Sphere),
    Mesh(MeshObject),
    List(HittableList),
}

impl Hittable {
    /// Nearest intersection with `t` strictly inside `ray_t`.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        match self {
            Hittable::Sphere(sphere) => sphere.hit(ray, ray_t),
            Hittable::Mesh(mesh) => mesh.hit(ray, ray_t),
            Hittable::List(list) => list.hit(ray, ray_t),
        }
    }
}

impl From<Sphere> for Hittable {
    fn from(sphere: Sphere) -> Self {
        Hittable::Sphere(sphere)
    }
}

impl From<MeshObject> for Hittable {
    fn from(mesh: MeshObject) -> Self {
        Hittable::Mesh(mesh)
    }
}

impl From<HittableList> for Hittable {
    fn from(list: HittableList) -> Self {
        Hittable::List(list)
    }
}

/// A list of hittable objects.
#[derive(Debug, Clone, Default)]
pub struct HittableList {
    objects: Vec<Hittable>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: impl Into<Hittable>) {
        self.objects.push(object.into());
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hittable> {
        self.objects.iter()
    }

    /// Closest hit over every object; each test shrinks the window.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;

        for object in &self.objects {
            let max = closest.map_or(ray_t.max, |rec| rec.t);
            if let Some(rec) = object.hit(ray, Interval::new(ray_t.min, max)) {
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_normal_orientation() {
        let ray = Ray::new(Point3::ORIGIN, -Vector3::Z);

        let front = HitRecord::new(&ray, 1.0, ray.at(1.0), Vector3::Z, MaterialId(0));
        assert!(front.front_face);
        assert_eq!(front.normal, Vector3::Z);

        let back = HitRecord::new(&ray, 1.0, ray.at(1.0), -Vector3::Z, MaterialId(0));
        assert!(!back.front_face);
        assert_eq!(back.normal, Vector3::Z);
    }

    #[test]
    fn test_list_returns_closest() {
        let mut list = HittableList::new();
        list.add(Sphere::new(Point3::new(0.0, 0.0, -10.0), 1.0, MaterialId(0)));
        list.add(Sphere::new(Point3::new(0.0, 0.0, -4.0), 1.0, MaterialId(1)));
        list.add(Sphere::new(Point3::new(0.0, 0.0, -7.0), 1.0, MaterialId(2)));
        assert_eq!(list.len(), 3);

        let ray = Ray::new(Point3::ORIGIN, -Vector3::Z);
        let rec = list.hit(&ray, Interval::new(0.001, Real::INFINITY)).unwrap();

        assert_eq!(rec.material, MaterialId(1));
        assert!((rec.t - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_nested_list() {
        let mut inner = HittableList::new();
        inner.add(Sphere::new(Point3::new(0.0, 0.0, -2.0), 0.5, MaterialId(3)));

        let mut outer = HittableList::new();
        outer.add(inner);
        outer.add(Sphere::new(Point3::new(0.0, 0.0, -9.0), 0.5, MaterialId(4)));

        let ray = Ray::new(Point3::ORIGIN, -Vector3::Z);
        let rec = Hittable::List(outer).hit(&ray, Interval::new(0.001, Real::INFINITY)).unwrap();
        assert_eq!(rec.material, MaterialId(3));
    }

    #[test]
    fn test_empty_list_misses() {
        let list = HittableList::new();
        let ray = Ray::new(Point3::ORIGIN, -Vector3::Z);
        assert!(list.is_empty());
        assert!(list.hit(&ray, Interval::UNIVERSE).is_none());
    }
}
