use std::fmt::{self, Debug};

/// Smallest representable point. Stands in for "unbounded below" in
/// [`complement`](crate::IntIntervalSet::complement) and
/// [`is_full`](crate::IntIntervalSet::is_full) computations.
pub const DOMAIN_MIN: i64 = i64::MIN;

/// Largest representable point. Stands in for "unbounded above".
pub const DOMAIN_MAX: i64 = i64::MAX;

/// A contiguous run of integers, closed on both ends:
/// `lower..=upper` with `lower <= upper`.
///
/// Every interval produced by this crate satisfies `lower <= upper`.
/// Intervals built directly from their fields are not checked;
/// operations taking separate `(lower, upper)` arguments validate
/// them and report [`Error::InvalidInterval`](crate::Error) instead.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    /// Inclusive lower bound.
    pub lower: i64,
    /// Inclusive upper bound.
    pub upper: i64,
}

impl Interval {
    /// Makes a new interval covering `lower..=upper`.
    pub const fn new(lower: i64, upper: i64) -> Interval {
        Interval { lower, upper }
    }

    /// Returns `true` if `point` lies within this interval, bounds included.
    pub fn contains(&self, point: i64) -> bool {
        point >= self.lower && point <= self.upper
    }

    /// Returns `true` if the two intervals share at least one point.
    pub fn overlaps(&self, other: &Interval) -> bool {
        use std::cmp::{max, min};
        max(self.lower, other.lower) <= min(self.upper, other.upper)
    }

    /// Returns `true` if the two intervals overlap or are immediately
    /// adjacent, i.e. they could be joined into a single interval.
    pub fn touches(&self, other: &Interval) -> bool {
        use std::cmp::{max, min};
        // Touching for closed intervals is equivalent to overlap of
        // intervals extended by one past their upper bounds.
        //
        // We need to do this dance to avoid arithmetic overflow
        // at the extremes of the domain.
        let longer_self_upper = if self.upper == DOMAIN_MAX {
            self.upper
        } else {
            self.upper + 1
        };
        let longer_other_upper = if other.upper == DOMAIN_MAX {
            other.upper
        } else {
            other.upper + 1
        };
        max(self.lower, other.lower) <= min(longer_self_upper, longer_other_upper)
    }

    /// Clips this interval against `other`, returning the shared run
    /// of points if there is one.
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        let lower = self.lower.max(other.lower);
        let upper = self.upper.min(other.upper);

        if lower > upper {
            return None;
        }

        Some(Interval::new(lower, upper))
    }
}

impl Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.lower, self.upper)
    }
}

impl From<(i64, i64)> for Interval {
    fn from((lower, upper): (i64, i64)) -> Interval {
        Interval::new(lower, upper)
    }
}
