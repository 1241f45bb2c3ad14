//! Displacements in 2D and 3D.
//!
//! Thin newtypes over glam's double-precision vectors. Keeping them apart
//! from [`Point2`](crate::Point2) / [`Point3`](crate::Point3) lets the
//! compiler reject `point + point`, and a `Vector2` never mixes with a
//! `Vector3`.

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use glam::{DQuat, DVec2, DVec3};
use rand::Rng;

use crate::{degrees_to_radians, Real};

macro_rules! impl_vector {
    ($name:ident, $glam:ty) => {
        impl $name {
            pub const ZERO: Self = Self(<$glam>::ZERO);

            #[inline]
            pub fn dot(self, other: Self) -> Real {
                self.0.dot(other.0)
            }

            #[inline]
            pub fn length_squared(self) -> Real {
                self.0.length_squared()
            }

            #[inline]
            pub fn length(self) -> Real {
                self.0.length()
            }

            /// Unit vector in the same direction. A zero vector yields NaNs.
            #[inline]
            pub fn normalized(self) -> Self {
                Self(self.0 / self.0.length())
            }

            /// True when every component is within `1e-8` of zero.
            pub fn near_zero(self) -> bool {
                const S: Real = 1e-8;
                self.0.abs().max_element() < S
            }

            /// Mirror this vector about a unit `normal`: `d - 2 (d . n) n`.
            #[inline]
            pub fn reflect(self, normal: Self) -> Self {
                Self(self.0 - 2.0 * self.0.dot(normal.0) * normal.0)
            }

            /// Random vector with every component drawn uniformly from `[min, max)`.
            pub fn random<R: Rng + ?Sized>(rng: &mut R, min: Real, max: Real) -> Self {
                Self(<$glam>::from_array(std::array::from_fn(|_| rng.gen_range(min..max))))
            }

            /// Uniformly distributed unit vector, by rejection sampling the unit ball.
            pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
                loop {
                    let p = Self::random(rng, -1.0, 1.0);
                    let len_sq = p.length_squared();
                    if 1e-16 < len_sq && len_sq <= 1.0 {
                        return p / len_sq.sqrt();
                    }
                }
            }
        }

        impl From<$glam> for $name {
            #[inline]
            fn from(v: $glam) -> Self {
                Self(v)
            }
        }

        impl From<$name> for $glam {
            #[inline]
            fn from(v: $name) -> Self {
                v.0
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

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<Real> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, t: Real) -> Self {
                Self(self.0 * t)
            }
        }

        impl Mul<$name> for Real {
            type Output = $name;

            #[inline]
            fn mul(self, v: $name) -> $name {
                $name(self * v.0)
            }
        }

        impl Div<Real> for $name {
            type Output = Self;

            #[inline]
            fn div(self, t: Real) -> Self {
                Self(self.0 / t)
            }
        }

        impl AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                self.0 -= rhs.0;
            }
        }

        impl MulAssign<Real> for $name {
            #[inline]
            fn mul_assign(&mut self, t: Real) {
                self.0 *= t;
            }
        }

        impl DivAssign<Real> for $name {
            #[inline]
            fn div_assign(&mut self, t: Real) {
                self.0 /= t;
            }
        }
    };
}

/// A 2D displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2(pub(crate) DVec2);

/// A 3D displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3(pub(crate) DVec3);

impl_vector!(Vector2, DVec2);
impl_vector!(Vector3, DVec3);

impl Vector2 {
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

impl Vector3 {
    pub const X: Self = Self(DVec3::X);
    pub const Y: Self = Self(DVec3::Y);
    pub const Z: Self = Self(DVec3::Z);

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

    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self(self.0.cross(other.0))
    }

    /// Rotate about a unit `axis` by `degrees`, right-handed.
    pub fn rotate(self, axis: Self, degrees: Real) -> Self {
        let rotation = DQuat::from_axis_angle(axis.0, degrees_to_radians(degrees));
        Self(rotation * self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_vector_operations() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Vector3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_cross_product() {
        assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
        assert_eq!(Vector3::Y.cross(Vector3::Z), Vector3::X);
        assert_eq!(Vector3::Y.cross(Vector3::X), -Vector3::Z);
    }

    #[test]
    fn test_normalized() {
        let v = Vector3::new(3.0, 0.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert!((v.normalized().length() - 1.0).abs() < 1e-12);

        let v2 = Vector2::new(0.0, -2.0);
        assert_eq!(v2.normalized(), Vector2::new(0.0, -1.0));
    }

    #[test]
    fn test_compound_assignment() {
        let mut v = Vector3::new(1.0, 1.0, 1.0);
        v += Vector3::X;
        v -= Vector3::Y;
        v *= 3.0;
        v /= 2.0;
        assert_eq!(v, Vector3::new(3.0, 0.0, 1.5));
        v[2] = 7.0;
        assert_eq!(v[2], 7.0);
    }

    #[test]
    fn test_near_zero() {
        assert!(Vector3::new(1e-9, -1e-9, 0.0).near_zero());
        assert!(!Vector3::new(1e-9, 1e-7, 0.0).near_zero());
    }

    #[test]
    fn test_reflect() {
        let d = Vector3::new(1.0, -1.0, 0.0);
        assert_eq!(d.reflect(Vector3::Y), Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_rotate() {
        let rotated = Vector3::X.rotate(Vector3::Y, 90.0);
        assert!((rotated - (-Vector3::Z)).length() < 1e-12);

        let full_turn = Vector3::new(1.0, 2.0, 3.0).rotate(Vector3::Z, 360.0);
        assert!((full_turn - Vector3::new(1.0, 2.0, 3.0)).length() < 1e-12);
    }

    #[test]
    fn test_random_unit_is_unit_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = Vector3::random_unit(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_random_unit_is_centered() {
        let mut rng = StdRng::seed_from_u64(11);
        let n = 20_000;
        let mut sum = Vector3::ZERO;
        for _ in 0..n {
            sum += Vector3::random_unit(&mut rng);
        }
        let mean = sum / n as Real;
        assert!(mean.length() < 0.03, "mean {mean:?} should be near zero");
    }

    #[test]
    fn test_random_within_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let v = Vector2::random(&mut rng, -0.5, 0.5);
            assert!((-0.5..0.5).contains(&v.x()));
            assert!((-0.5..0.5).contains(&v.y()));
        }
    }

    #[test]
    fn test_glam_conversion() {
        let v = Vector3::new(1.0, -2.0, 3.5);
        let g: DVec3 = v.into();
        assert_eq!(g, DVec3::new(1.0, -2.0, 3.5));
        assert_eq!(Vector3::from(g), v);
    }
}
