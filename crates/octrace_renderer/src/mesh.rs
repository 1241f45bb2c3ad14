//! Triangle meshes.

use octrace_math::{Aabb, Interval, Point3, Ray, Real, Triangle, TriangleIntersection};

use crate::octree::Octree;
use crate::{HitRecord, MaterialId};

/// An ordered list of triangles.
///
/// Order is not stable: [`TriangleMesh::sort`] rearranges the triangles,
/// so indices returned by a query are only valid until the next sort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    triangles: Vec<Triangle>,
}

impl TriangleMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Bounding box over every vertex, [`Aabb::EMPTY`] for an empty mesh.
    pub fn bounds(&self) -> Aabb {
        Aabb::enclosing(self.triangles.iter().flat_map(|t| t.vertices().iter().copied()))
    }

    /// Order triangles by their nearest vertex to `origin`, closest first.
    ///
    /// The sort is stable, so sorting twice by the same origin is a no-op.
    pub fn sort(&mut self, origin: Point3) {
        self.triangles.sort_by(|a, b| {
            let da = a.dist_squared_interval(origin).min;
            let db = b.dist_squared_interval(origin).min;
            da.total_cmp(&db)
        });
    }

    /// Nearest intersection in front of the ray origin.
    pub fn intersect(&self, ray: &Ray) -> Option<(usize, TriangleIntersection)> {
        self.hit(ray, Interval::new(0.0, Real::INFINITY))
    }

    /// Nearest intersection with `t` strictly inside `ray_t`.
    ///
    /// Linear scan over every triangle.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<(usize, TriangleIntersection)> {
        let mut closest: Option<(usize, TriangleIntersection)> = None;

        for (index, triangle) in self.triangles.iter().enumerate() {
            let Some(hit) = triangle.intersect(ray) else {
                continue;
            };
            let max = closest.map_or(ray_t.max, |(_, c)| c.t);
            if ray_t.surrounds(hit.t) && hit.t < max {
                closest = Some((index, hit));
            }
        }

        closest
    }
}

impl FromIterator<Triangle> for TriangleMesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self::from_triangles(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TriangleMesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

/// A triangle mesh placed in a scene: an octree over the triangles plus
/// the material every triangle shares.
#[derive(Debug, Clone)]
pub struct MeshObject {
    octree: Octree,
    material: MaterialId,
}

impl MeshObject {
    pub fn new(mesh: &TriangleMesh, material: MaterialId) -> Self {
        Self {
            octree: Octree::new(mesh),
            material,
        }
    }

    pub fn with_max_levels(mesh: &TriangleMesh, max_levels: u32, material: MaterialId) -> Self {
        Self {
            octree: Octree::with_max_levels(mesh, max_levels),
            material,
        }
    }

    pub fn octree(&self) -> &Octree {
        &self.octree
    }

    pub fn material(&self) -> MaterialId {
        self.material
    }

    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let hit = self.octree.hit(ray, ray_t)?;
        let normal = self.octree.triangles()[hit.triangle].normal();
        Some(HitRecord::new(
            ray,
            hit.intersection.t,
            hit.intersection.point,
            normal,
            self.material,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octrace_math::Vector3;

    fn tri_at_z(z: Real) -> Triangle {
        Triangle::new(
            Point3::new(-1.0, -1.0, z),
            Point3::new(1.0, -1.0, z),
            Point3::new(0.0, 1.0, z),
        )
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = TriangleMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.bounds(), Aabb::EMPTY);
        assert!(mesh.intersect(&Ray::new(Point3::ORIGIN, -Vector3::Z)).is_none());
    }

    #[test]
    fn test_bounds() {
        let mesh: TriangleMesh = vec![tri_at_z(-2.0), tri_at_z(-5.0)].into_iter().collect();
        let bounds = mesh.bounds();
        assert_eq!(bounds.x, Interval::new(-1.0, 1.0));
        assert_eq!(bounds.y, Interval::new(-1.0, 1.0));
        assert_eq!(bounds.z, Interval::new(-5.0, -2.0));
    }

    #[test]
    fn test_intersect_returns_nearest() {
        // Far triangle first in sequence order
        let mesh = TriangleMesh::from_triangles(vec![tri_at_z(-8.0), tri_at_z(-3.0), tri_at_z(-5.0)]);
        let ray = Ray::new(Point3::ORIGIN, -Vector3::Z);

        let (index, hit) = mesh.intersect(&ray).unwrap();
        assert_eq!(index, 1);
        assert!((hit.t - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_hit_respects_window() {
        let mesh = TriangleMesh::from_triangles(vec![tri_at_z(-8.0), tri_at_z(-3.0)]);
        let ray = Ray::new(Point3::ORIGIN, -Vector3::Z);

        let (index, hit) = mesh.hit(&ray, Interval::new(4.0, Real::INFINITY)).unwrap();
        assert_eq!(index, 0);
        assert!((hit.t - 8.0).abs() < 1e-9);
        assert!(mesh.hit(&ray, Interval::new(0.001, 2.0)).is_none());
    }

    #[test]
    fn test_sort_ascending_and_idempotent() {
        let mut mesh = TriangleMesh::from_triangles(vec![
            tri_at_z(-9.0),
            tri_at_z(-2.0),
            tri_at_z(-5.0),
            tri_at_z(-2.0),
        ]);
        mesh.sort(Point3::ORIGIN);

        let mins: Vec<Real> = mesh
            .iter()
            .map(|t| t.dist_squared_interval(Point3::ORIGIN).min)
            .collect();
        assert!(mins.windows(2).all(|w| w[0] <= w[1]));

        let once = mesh.clone();
        mesh.sort(Point3::ORIGIN);
        assert_eq!(mesh, once);
    }

    #[test]
    fn test_mesh_object_hit_orients_normal() {
        let mesh = TriangleMesh::from_triangles(vec![tri_at_z(-3.0)]);
        let object = MeshObject::new(&mesh, MaterialId(7));

        let ray = Ray::new(Point3::ORIGIN, -Vector3::Z);
        let rec = object.hit(&ray, Interval::new(0.001, Real::INFINITY)).unwrap();

        assert!((rec.t - 3.0).abs() < 1e-9);
        assert_eq!(rec.material, MaterialId(7));
        // Counter-clockwise winding seen from +Z faces the ray
        assert!(rec.front_face);
        assert!((rec.normal - Vector3::Z).length() < 1e-9);

        let back = Ray::new(Point3::new(0.0, 0.0, -6.0), Vector3::Z);
        let rec = object.hit(&back, Interval::new(0.001, Real::INFINITY)).unwrap();
        assert!(!rec.front_face);
        assert!((rec.normal + Vector3::Z).length() < 1e-9);
    }
}
