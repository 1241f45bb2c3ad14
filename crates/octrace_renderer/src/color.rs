//! Linear RGB color.

use std::ops::{Add, AddAssign, Div, Mul};

use octrace_math::glam::DVec3;
use octrace_math::Real;

use crate::Rgba8;

/// Default display gamma.
pub const DEFAULT_GAMMA: Real = 2.2;

/// A linear RGB color, channels nominally in `[0, 1]`.
///
/// Stored as a glam `DVec3` (x = red, y = green, z = blue).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color(DVec3);

impl Color {
    pub const BLACK: Color = Color(DVec3::ZERO);
    pub const WHITE: Color = Color(DVec3::ONE);

    pub const fn new(r: Real, g: Real, b: Real) -> Self {
        Self(DVec3::new(r, g, b))
    }

    #[inline]
    pub fn r(self) -> Real {
        self.0.x
    }

    #[inline]
    pub fn g(self) -> Real {
        self.0.y
    }

    #[inline]
    pub fn b(self) -> Real {
        self.0.z
    }

    /// Linear interpolation from `self` (at `a = 0`) to `other` (at `a = 1`).
    pub fn lerp(self, other: Color, a: Real) -> Color {
        Color(self.0.lerp(other.0, a))
    }

    /// Apply `channel^(1/gamma)` to every channel.
    pub fn linear_to_gamma(self, gamma: Real) -> Color {
        Color(self.0.powf(1.0 / gamma))
    }

    /// Convert to 8-bit fixed point with an opaque alpha.
    pub fn to_rgba8(self) -> Rgba8 {
        Rgba8 {
            r: channel_to_byte(self.0.x),
            g: channel_to_byte(self.0.y),
            b: channel_to_byte(self.0.z),
            a: 255,
        }
    }
}

/// `floor(v * 256)` clamped to a byte. NaN maps to 0.
#[inline]
fn channel_to_byte(v: Real) -> u8 {
    (v * 256.0).floor().clamp(0.0, 255.0) as u8
}

impl From<DVec3> for Color {
    fn from(v: DVec3) -> Self {
        Color(v)
    }
}

impl Add for Color {
    type Output = Color;

    #[inline]
    fn add(self, rhs: Color) -> Color {
        Color(self.0 + rhs.0)
    }
}

impl AddAssign for Color {
    #[inline]
    fn add_assign(&mut self, rhs: Color) {
        self.0 += rhs.0;
    }
}

/// Per-channel product, used to compound attenuation along a path.
impl Mul for Color {
    type Output = Color;

    #[inline]
    fn mul(self, rhs: Color) -> Color {
        Color(self.0 * rhs.0)
    }
}

impl Mul<Real> for Color {
    type Output = Color;

    #[inline]
    fn mul(self, t: Real) -> Color {
        Color(self.0 * t)
    }
}

impl Mul<Color> for Real {
    type Output = Color;

    #[inline]
    fn mul(self, c: Color) -> Color {
        Color(self * c.0)
    }
}

impl Div<Real> for Color {
    type Output = Color;

    #[inline]
    fn div(self, t: Real) -> Color {
        Color(self.0 / t)
    }
}
