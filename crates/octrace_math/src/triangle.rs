//! Triangle geometry.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use std::ops::Index;

use crate::{Interval, Point3, Ray, Real, Vector3};

/// Tolerance for the parallel test, the barycentric edge checks and the
/// minimum accepted ray parameter.
pub const EPSILON: Real = f32::EPSILON as Real;

/// Three points in space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point3; 3],
}

/// Where a ray crossed a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleIntersection {
    /// Ray parameter of the crossing
    pub t: Real,
    /// Barycentric weight of vertex b
    pub u: Real,
    /// Barycentric weight of vertex c
    pub v: Real,
    pub point: Point3,
}

impl Triangle {
    pub const fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self { vertices: [a, b, c] }
    }

    #[inline]
    pub fn a(&self) -> Point3 {
        self.vertices[0]
    }

    #[inline]
    pub fn b(&self) -> Point3 {
        self.vertices[1]
    }

    #[inline]
    pub fn c(&self) -> Point3 {
        self.vertices[2]
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    /// Unit normal following the a -> b -> c winding.
    pub fn normal(&self) -> Vector3 {
        (self.b() - self.a()).cross(self.c() - self.a()).normalized()
    }

    pub fn centroid(&self) -> Point3 {
        self.a() + ((self.b() - self.a()) + (self.c() - self.a())) / 3.0
    }

    /// Smallest and largest squared vertex distance from `origin`.
    pub fn dist_squared_interval(&self, origin: Point3) -> Interval {
        self.vertices
            .iter()
            .map(|v| v.distance_squared(origin))
            .fold(Interval::EMPTY, |acc, d| acc.including(d))
    }

    /// Möller-Trumbore ray-triangle intersection.
    ///
    /// Barycentric coordinates that fall outside the triangle by less than
    /// [`EPSILON`] are still accepted, so rays hitting a shared edge do not
    /// slip between neighbouring triangles. Crossings at `t <= EPSILON`
    /// (behind or at the origin) are rejected.
    pub fn intersect(&self, ray: &Ray) -> Option<TriangleIntersection> {
        let e1 = self.b() - self.a();
        let e2 = self.c() - self.a();
        let dir_x_e2 = ray.direction().cross(e2);
        let det = e1.dot(dir_x_e2);

        // Ray is parallel to triangle
        if det.abs() < EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let s = ray.origin() - self.a();
        let u = inv_det * s.dot(dir_x_e2);

        if u < -EPSILON || u > 1.0 + EPSILON {
            return None;
        }

        let s_x_e1 = s.cross(e1);
        let v = inv_det * ray.direction().dot(s_x_e1);

        if v < -EPSILON || u + v > 1.0 + EPSILON {
            return None;
        }

        let t = inv_det * e2.dot(s_x_e1);

        (t > EPSILON).then(|| TriangleIntersection {
            t,
            u,
            v,
            point: ray.at(t),
        })
    }
}

impl Index<usize> for Triangle {
    type Output = Point3;

    fn index(&self, i: usize) -> &Point3 {
        &self.vertices[i]
    }
}
