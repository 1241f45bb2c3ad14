use crate::{Point3, Real, Vector3};

/// A ray in 3D space with an origin and a direction.
///
/// The direction is not required to be normalized; `t` is measured in
/// multiples of its length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: Real) -> Point3 {
        self.origin + self.direction * t
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Point3::ORIGIN,
            direction: -Vector3::Z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Point3::new(1.0, 2.0, 3.0);
        let direction = Vector3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin(), origin);
        assert_eq!(ray.direction(), direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point3::ORIGIN, Vector3::X);

        assert_eq!(ray.at(0.0), Point3::ORIGIN);
        assert_eq!(ray.at(1.0), Point3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(2.0), Point3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Point3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_unnormalized_direction() {
        let ray = Ray::new(Point3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 0.0, -4.0));
        assert_eq!(ray.at(0.5), Point3::new(0.0, 1.0, -2.0));
    }
}
