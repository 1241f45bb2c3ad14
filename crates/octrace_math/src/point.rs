//! Positions in 2D and 3D.

use std::ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign};

use glam::{DVec2, DVec3};

use crate::{Real, Vector2, Vector3};

macro_rules! impl_point {
    ($name:ident, $vector:ident, $glam:ty) => {
        impl $name {
            pub const ORIGIN: Self = Self(<$glam>::ZERO);

            /// The displacement from the origin to this point.
            #[inline]
            pub fn to_vector(self) -> $vector {
                $vector(self.0)
            }

            #[inline]
            pub fn distance_squared(self, other: Self) -> Real {
                self.0.distance_squared(other.0)
            }
        }

        impl From<$glam> for $name {
            #[inline]
            fn from(p: $glam) -> Self {
                Self(p)
            }
        }

        impl From<$name> for $glam {
            #[inline]
            fn from(p: $name) -> Self {
                p.0
            }
        }

        impl Index<usize> for $name {
            type Output = Real;

            #[inline]
            fn index(&self, i: usize) -> &Real {
                &self.0[i]
            }
        }

        impl IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut Real {
                &mut self.0[i]
            }
        }

        impl Sub for $name {
            type Output = $vector;

            #[inline]
            fn sub(self, rhs: Self) -> $vector {
                $vector(self.0 - rhs.0)
            }
        }

        impl Add<$vector> for $name {
            type Output = Self;

            #[inline]
            fn add(self, v: $vector) -> Self {
                Self(self.0 + v.0)
            }
        }

        impl Sub<$vector> for $name {
            type Output = Self;

            #[inline]
            fn sub(self, v: $vector) -> Self {
                Self(self.0 - v.0)
            }
        }

        impl AddAssign<$vector> for $name {
            #[inline]
            fn add_assign(&mut self, v: $vector) {
                self.0 += v.0;
            }
        }

        impl SubAssign<$vector> for $name {
            #[inline]
            fn sub_assign(&mut self, v: $vector) {
                self.0 -= v.0;
            }
        }
    };
}

/// A position in the plane.
///
/// Points can be translated by a vector, and the difference of two points
/// is a vector; adding two points is not defined.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2(DVec2);

/// A position in space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3(DVec3);

impl_point!(Point2, Vector2, DVec2);
impl_point!(Point3, Vector3, DVec3);

impl Point2 {
    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Self(DVec2::new(x, y))
    }

    #[inline]
    pub fn x(self) -> Real {
        self.0.x
    }

    #[inline]
    pub fn y(self) -> Real {
        self.0.y
    }
}

impl Point3 {
    #[inline]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self(DVec3::new(x, y, z))
    }

    #[inline]
    pub fn x(self) -> Real {
        self.0.x
    }

    #[inline]
    pub fn y(self) -> Real {
        self.0.y
    }

    #[inline]
    pub fn z(self) -> Real {
        self.0.z
    }

    /// Rotate this point by `degrees` about the line through `pivot` along
    /// the unit vector `axis`.
    pub fn rotate_around(self, pivot: Self, axis: Vector3, degrees: Real) -> Self {
        pivot + (self - pivot).rotate(axis, degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_vector_arithmetic() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let q = Point3::new(4.0, 6.0, 3.0);

        assert_eq!(q - p, Vector3::new(3.0, 4.0, 0.0));
        assert_eq!(p + (q - p), q);
        assert_eq!(q - (q - p), p);
        assert_eq!(p.distance_squared(q), 25.0);
    }

    #[test]
    fn test_point_assignment() {
        let mut p = Point2::new(1.0, 1.0);
        p += Vector2::new(2.0, 0.0);
        assert_eq!(p, Point2::new(3.0, 1.0));
        p -= Vector2::new(0.0, 1.0);
        assert_eq!(p, Point2::new(3.0, 0.0));
        assert_eq!(p.to_vector().x(), 3.0);
    }

    #[test]
    fn test_rotate_around() {
        let pivot = Point3::new(1.0, 0.0, 0.0);
        let p = Point3::new(2.0, 0.0, 0.0);

        let rotated = p.rotate_around(pivot, Vector3::Y, 90.0);
        assert!((rotated - Point3::new(1.0, 0.0, -1.0)).length() < 1e-12);

        // Distance to the pivot is preserved
        let far = Point3::new(4.0, 5.0, 6.0).rotate_around(pivot, Vector3::Z, 33.0);
        assert!((far.distance_squared(pivot) - Point3::new(4.0, 5.0, 6.0).distance_squared(pivot)).abs() < 1e-9);
    }
}
