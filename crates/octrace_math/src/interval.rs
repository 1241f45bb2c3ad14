use crate::Real;

/// A range of real values.
///
/// Used both as the acceptance window for ray parameters and as the
/// min/max squared-distance bounds of a triangle from a reference point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: Real,
    pub max: Real,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: Real, max: Real) -> Self {
        Self { min, max }
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> Real {
        self.max - self.min
    }

    /// True when min > max.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: Real) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is within [min, max).
    pub fn contains_half_open(&self, x: Real) -> bool {
        self.min <= x && x < self.max
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: Real) -> bool {
        self.min < x && x < self.max
    }

    /// Expands the interval by delta/2 on each side.
    pub fn expand(&self, delta: Real) -> Interval {
        let padding = delta / 2.0;
        Interval::new(self.min - padding, self.max + padding)
    }

    /// Grow the interval just enough to include x.
    pub fn including(&self, x: Real) -> Interval {
        Interval::new(self.min.min(x), self.max.max(x))
    }

    /// The midpoint of the interval.
    pub fn midpoint(&self) -> Real {
        (self.min + self.max) * 0.5
    }

    /// An empty interval (min > max, contains nothing).
    pub const EMPTY: Interval = Interval {
        min: Real::INFINITY,
        max: Real::NEG_INFINITY,
    };

    /// A universe interval (contains everything).
    pub const UNIVERSE: Interval = Interval {
        min: Real::NEG_INFINITY,
        max: Real::INFINITY,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_size() {
        let interval = Interval::new(2.0, 7.0);
        assert_eq!(interval.size(), 5.0);

        let negative = Interval::new(-5.0, 5.0);
        assert_eq!(negative.size(), 10.0);
    }

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));

        // Outside bounds
        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_interval_contains_half_open() {
        let interval = Interval::new(0.0, 10.0);

        assert!(interval.contains_half_open(0.0));
        assert!(interval.contains_half_open(9.999));
        assert!(!interval.contains_half_open(10.0));
        assert!(!interval.contains_half_open(-0.001));
    }

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));

        assert!(interval.surrounds(5.0));
        assert!(interval.surrounds(0.1));
        assert!(interval.surrounds(9.9));

        assert!(!interval.surrounds(-0.1));
        assert!(!interval.surrounds(10.1));
    }

    #[test]
    fn test_interval_expand() {
        let interval = Interval::new(0.0, 10.0);
        let expanded = interval.expand(4.0);

        // Expanded by 2.0 on each side (4.0 / 2)
        assert_eq!(expanded.min, -2.0);
        assert_eq!(expanded.max, 12.0);
        assert_eq!(expanded.size(), 14.0);
    }

    #[test]
    fn test_interval_including() {
        let grown = Interval::EMPTY.including(3.0).including(-1.0);
        assert_eq!(grown, Interval::new(-1.0, 3.0));
        assert_eq!(grown.midpoint(), 1.0);
    }

    #[test]
    fn test_interval_empty() {
        let empty = Interval::EMPTY;

        assert!(empty.is_empty());
        assert_eq!(empty.size(), Real::NEG_INFINITY);
        assert!(!empty.contains(0.0));
        assert!(!empty.contains(Real::INFINITY));
    }

    #[test]
    fn test_interval_universe() {
        let universe = Interval::UNIVERSE;

        assert!(universe.contains(0.0));
        assert!(universe.contains(1e10));
        assert!(universe.contains(-1e10));
        assert_eq!(universe.size(), Real::INFINITY);
    }
}
