use crate::{Interval, Point3, Ray, Real, Triangle};

/// Axis-Aligned Bounding Box used by the octree.
///
/// An AABB is defined by three intervals (one per axis) that bound a 3D volume.
/// Containment is half-open (`min <= c < max`) on every axis, so the eight
/// octants of a box never both contain the same point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Create a new AABB from three intervals.
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        let mut aabb = Self { x, y, z };
        aabb.pad_to_minimums();
        aabb
    }

    /// Create an AABB from two corner points.
    pub fn from_points(a: Point3, b: Point3) -> Self {
        let x = Interval::new(a.x().min(b.x()), a.x().max(b.x()));
        let y = Interval::new(a.y().min(b.y()), a.y().max(b.y()));
        let z = Interval::new(a.z().min(b.z()), a.z().max(b.z()));

        Self::new(x, y, z)
    }

    /// Smallest box holding every point. No points gives [`Aabb::EMPTY`].
    pub fn enclosing(points: impl IntoIterator<Item = Point3>) -> Self {
        points.into_iter().fold(Self::EMPTY, |acc, p| Self {
            x: acc.x.including(p.x()),
            y: acc.y.including(p.y()),
            z: acc.z.including(p.z()),
        })
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty() || self.z.is_empty()
    }

    /// Grow each axis by `fraction` of its extent on both sides.
    ///
    /// Axes thinner than the minimum padding are widened as well, so a
    /// flat set of points still ends up strictly inside the box.
    pub fn padded(&self, fraction: Real) -> Aabb {
        if self.is_empty() {
            return *self;
        }
        let grow = |i: Interval| i.expand(2.0 * fraction * i.size());
        Self::new(grow(self.x), grow(self.y), grow(self.z))
    }

    /// Half-open containment test on every axis.
    pub fn contains(&self, p: Point3) -> bool {
        self.x.contains_half_open(p.x())
            && self.y.contains_half_open(p.y())
            && self.z.contains_half_open(p.z())
    }

    /// A triangle is contained only when all three vertices are.
    pub fn contains_triangle(&self, triangle: &Triangle) -> bool {
        triangle.vertices().iter().all(|&v| self.contains(v))
    }

    /// One of the eight equal sub-boxes.
    ///
    /// Bit 0 of `index` selects the upper half along X, bit 1 along Y and
    /// bit 2 along Z.
    pub fn octant(&self, index: usize) -> Aabb {
        let half = |interval: Interval, upper: bool| {
            let mid = interval.midpoint();
            if upper {
                Interval::new(mid, interval.max)
            } else {
                Interval::new(interval.min, mid)
            }
        };

        Self {
            x: half(self.x, index & 1 != 0),
            y: half(self.y, index & 2 != 0),
            z: half(self.z, index & 4 != 0),
        }
    }

    /// All eight octants, in [`Aabb::octant`] order.
    pub fn octants(&self) -> [Aabb; 8] {
        std::array::from_fn(|i| self.octant(i))
    }

    /// Test if a ray intersects this AABB within the given interval.
    ///
    /// Uses the slab method - efficient ray-box intersection test.
    pub fn hit(&self, r: &Ray, mut ray_t: Interval) -> bool {
        for axis in 0..3 {
            let interval = self.axis_interval(axis);
            let adinv = 1.0 / r.direction[axis];
            let mut t0 = (interval.min - r.origin[axis]) * adinv;
            let mut t1 = (interval.max - r.origin[axis]) * adinv;
            if adinv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }
            ray_t.min = t0.max(ray_t.min);
            ray_t.max = t1.min(ray_t.max);
            if ray_t.max <= ray_t.min {
                return false;
            }
        }

        true
    }

    /// Pad intervals to avoid zero-width AABBs (degenerate cases).
    fn pad_to_minimums(&mut self) {
        let delta = 0.0001;
        if self.x.size() < delta {
            self.x = self.x.expand(delta);
        }
        if self.y.size() < delta {
            self.y = self.y.expand(delta);
        }
        if self.z.size() < delta {
            self.z = self.z.expand(delta);
        }
    }

    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };
}
