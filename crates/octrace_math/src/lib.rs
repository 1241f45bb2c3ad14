//! octrace math - geometric algebra for the path tracer.
//!
//! Points and vectors are distinct newtypes over glam's `DVec2` / `DVec3`,
//! so `Point3 - Point3 = Vector3` and `Point3 + Vector3 = Point3` are checked
//! by the compiler while the arithmetic itself is glam's. Everything here is
//! plain `Copy` data.

// Re-export glam for interop with callers that already speak glam
pub use glam;

mod aabb;
mod interval;
mod point;
mod ray;
mod triangle;
mod vector;

pub use aabb::Aabb;
pub use interval::Interval;
pub use point::{Point2, Point3};
pub use ray::Ray;
pub use triangle::{Triangle, TriangleIntersection, EPSILON};
pub use vector::{Vector2, Vector3};

/// Scalar type used throughout the renderer.
pub type Real = f64;

/// Convert an angle in degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: Real) -> Real {
    degrees.to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn coordinate() -> impl Strategy<Value = Real> {
        -1.0e3..1.0e3
    }

    fn vector3() -> impl Strategy<Value = Vector3> {
        (coordinate(), coordinate(), coordinate()).prop_map(|(x, y, z)| Vector3::new(x, y, z))
    }

    fn point3() -> impl Strategy<Value = Point3> {
        (coordinate(), coordinate(), coordinate()).prop_map(|(x, y, z)| Point3::new(x, y, z))
    }

    proptest! {
        #[test]
        fn vector_minus_itself_is_zero(v in vector3()) {
            prop_assert_eq!(v - v, Vector3::ZERO);
        }

        #[test]
        fn point_plus_vector_minus_vector_is_point(p in point3(), v in vector3()) {
            let back = p + v - v;
            prop_assert!((back - p).length() < 1e-9);
        }

        #[test]
        fn point_difference_translates_back(a in point3(), b in point3()) {
            let d = b - a;
            prop_assert!(((a + d) - b).length() < 1e-9);
        }
    }

    #[test]
    fn test_degrees_to_radians() {
        assert!((degrees_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(degrees_to_radians(0.0), 0.0);
    }
}
