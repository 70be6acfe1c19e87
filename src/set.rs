use std::fmt::{self, Debug};
use std::iter::FusedIterator;

use crate::cut::{self, CutPoint};
use crate::error::{check_interval, Error};
use crate::interval::{Interval, DOMAIN_MAX, DOMAIN_MIN};

#[cfg(feature = "serde1")]
use serde::{
    de::{Deserialize, Deserializer, SeqAccess, Visitor},
    ser::{Serialize, Serializer},
};

/// A mutable set of `i64` values stored compactly as a sorted sequence
/// of disjoint closed intervals.
///
/// Contiguous and overlapping intervals are always coalesced, so the
/// stored representation is canonical: between any two stored
/// intervals there is a gap of at least one integer.
///
/// [`union`](IntIntervalSet::union) mutates the set in place and
/// returns it for chaining; [`intersection`](IntIntervalSet::intersection),
/// [`complement`](IntIntervalSet::complement) and
/// [`span_set`](IntIntervalSet::span_set) build new sets with
/// independent storage. The set is backed by a `Vec`, so unions
/// landing in fresh gaps pay for an array splice; workloads whose
/// intervals mostly overlap are cheap.
///
/// Not synchronized: callers that share a set across threads must
/// serialize writers; a [`clone`](Clone::clone) is a deep copy and can
/// be read independently of later mutation of the original.
#[derive(Clone, PartialEq, Eq)]
pub struct IntIntervalSet {
    intervals: Vec<Interval>,
}

impl Default for IntIntervalSet {
    fn default() -> Self {
        Self::new()
    }
}

impl IntIntervalSet {
    /// Makes a new empty `IntIntervalSet`.
    pub fn new() -> Self {
        IntIntervalSet {
            intervals: Vec::new(),
        }
    }

    /// Makes a set directly from a backing vector of intervals.
    ///
    /// The vector is trusted as-is: it must already be sorted by lower
    /// bound, with every pair of neighbors separated by a gap of at
    /// least one integer, and `lower <= upper` in every entry. No
    /// validation or normalization is applied; operations on a set
    /// built from a malformed vector may return nonsense.
    pub fn from_intervals(intervals: Vec<Interval>) -> Self {
        IntIntervalSet { intervals }
    }

    /// Gets an ordered iterator over the stored intervals.
    pub fn iter(&self) -> impl Iterator<Item = &Interval> {
        self.intervals.iter()
    }

    /// Returns `true` if the set covers no points at all.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns `true` if the set is exactly the full domain
    /// `[DOMAIN_MIN, DOMAIN_MAX]`.
    pub fn is_full(&self) -> bool {
        self.intervals.len() == 1 && self.intervals[0] == Interval::new(DOMAIN_MIN, DOMAIN_MAX)
    }

    /// Returns `true` if any stored interval covers `point`.
    pub fn contains(&self, point: i64) -> bool {
        cut::find(&self.intervals, point).contained
    }

    /// Returns a reference to the stored interval covering `point`,
    /// if any.
    pub fn get(&self, point: i64) -> Option<&Interval> {
        let cut = cut::find(&self.intervals, point);
        if cut.contained {
            Some(&self.intervals[cut.index])
        } else {
            None
        }
    }

    /// Adds every point of `lower..=upper` to the set, coalescing with
    /// any stored intervals the new one overlaps or touches. Returns
    /// the set itself so unions can be chained.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if `lower > upper`; the set
    /// is left unchanged.
    pub fn union(&mut self, lower: i64, upper: i64) -> Result<&mut Self, Error> {
        check_interval(lower, upper)?;

        let lower_cut = cut::find(&self.intervals, lower);
        let upper_cut = if upper == lower {
            lower_cut
        } else {
            cut::find_hinted(&self.intervals, upper, Some(lower_cut.index), None)
        };
        self.splice(lower, upper, lower_cut, upper_cut);

        Ok(self)
    }

    /// Adds a single point to the set. Equivalent to
    /// `union(point, point)`, which can never fail.
    pub fn union_point(&mut self, point: i64) -> &mut Self {
        let cut = cut::find(&self.intervals, point);
        self.splice(point, point, cut, cut);
        self
    }

    /// Adds every supplied interval to the set, in order.
    ///
    /// The final coverage is independent of the supplied order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if any supplied interval has
    /// `lower > upper`. Every interval is validated up front, so a
    /// failed call leaves the set completely unchanged.
    pub fn union_all<I>(&mut self, intervals: I) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = Interval>,
    {
        let intervals: Vec<Interval> = intervals.into_iter().collect();
        for interval in &intervals {
            check_interval(interval.lower, interval.upper)?;
        }
        for interval in intervals {
            self.union(interval.lower, interval.upper)?;
        }
        Ok(self)
    }

    // Replaces every stored interval that `lower..=upper` overlaps or
    // touches with the single merged interval covering them all.
    fn splice(&mut self, lower: i64, upper: i64, lower_cut: CutPoint, upper_cut: CutPoint) {
        let new = Interval::new(lower, upper);

        if lower_cut.index >= self.intervals.len() {
            // Past the last stored interval and not touching it.
            self.intervals.push(new);
            return;
        }
        if upper_cut.index == 0 && !upper_cut.connected {
            // Entirely before the first stored interval.
            self.intervals.insert(0, new);
            return;
        }
        if lower_cut.index == upper_cut.index && !lower_cut.connected && !upper_cut.connected {
            // Both endpoints fall in the same gap, touching nothing.
            self.intervals.insert(lower_cut.index, new);
            return;
        }

        // Absorb every stored interval the new one overlaps or
        // touches. The cut points bound the absorbed run, except that
        // an adjacency resolved to one neighbor of a single-integer
        // gap can leave a touching interval just past the other side.
        let mut start = lower_cut.index;
        let mut end = upper_cut.index;
        while end < self.intervals.len() && self.intervals[end].touches(&new) {
            end += 1;
        }
        while start > 0 && self.intervals[start - 1].touches(&new) {
            start -= 1;
        }

        let merged = Interval::new(
            lower.min(self.intervals[start].lower),
            upper.max(self.intervals[end - 1].upper),
        );
        self.intervals.splice(start..end, std::iter::once(merged));
    }

    /// Returns a new set holding every point that is in both this set
    /// and `lower..=upper`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if `lower > upper`.
    pub fn intersection(&self, lower: i64, upper: i64) -> Result<IntIntervalSet, Error> {
        check_interval(lower, upper)?;

        let mut bounded = IntIntervalSet::new();
        if self.intervals.is_empty() {
            return Ok(bounded);
        }

        let bounds = Interval::new(lower, upper);
        let start = cut::find(&self.intervals, lower).index.min(self.intervals.len());
        for interval in &self.intervals[start..] {
            if upper < interval.lower {
                // Sorted storage: nothing further can overlap.
                break;
            }
            if let Some(clipped) = interval.intersect(&bounds) {
                bounded.intervals.push(clipped);
            }
        }

        Ok(bounded)
    }

    /// Returns a new set covering exactly the points of
    /// `[DOMAIN_MIN, DOMAIN_MAX]` that this set does not cover.
    ///
    /// The complement of the empty set is the full domain, and the
    /// complement of the full domain is empty.
    pub fn complement(&self) -> IntIntervalSet {
        let mut intervals = Vec::new();

        let mut cursor = DOMAIN_MIN;
        for interval in &self.intervals {
            if cursor < interval.lower {
                intervals.push(Interval::new(cursor, interval.lower - 1));
            }
            if interval.upper == DOMAIN_MAX {
                // Nothing representable beyond this interval.
                return IntIntervalSet { intervals };
            }
            cursor = interval.upper + 1;
        }
        intervals.push(Interval::new(cursor, DOMAIN_MAX));

        IntIntervalSet { intervals }
    }

    /// Returns the interval running from the lowest to the highest
    /// covered point, or `None` for an empty set.
    pub fn span(&self) -> Option<Interval> {
        let first = self.intervals.first()?;
        let last = self.intervals.last()?;
        Some(Interval::new(first.lower, last.upper))
    }

    /// Returns a new set covering exactly [`span`](IntIntervalSet::span),
    /// or an empty set if this set is empty.
    pub fn span_set(&self) -> IntIntervalSet {
        match self.span() {
            Some(span) => IntIntervalSet {
                intervals: vec![span],
            },
            None => IntIntervalSet::new(),
        }
    }

    /// Gets a lazy, strictly ascending iterator over every covered
    /// point, interval by interval.
    ///
    /// The iterator is finite and restartable (call `points` again for
    /// a fresh pass), but spans can be astronomically large; whether
    /// walking one to completion is practical is the caller's call.
    pub fn points(&self) -> Points<'_> {
        Points {
            intervals: self.intervals.iter(),
            current: None,
        }
    }

    /// Removes every point of `lower..=upper` from the set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if `lower > upper`;
    /// otherwise always returns [`Error::RemoveUnimplemented`].
    /// Interval subtraction is deliberately out of scope for the
    /// current contract; the operation is declared so the eventual
    /// signature is already settled.
    pub fn remove(&mut self, lower: i64, upper: i64) -> Result<&mut Self, Error> {
        check_interval(lower, upper)?;
        Err(Error::RemoveUnimplemented)
    }
}

// We can't just derive this automatically, because that would
// expose irrelevant (and private) implementation details.
// Instead implement it in the same way that BTreeSet does.
impl Debug for IntIntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl IntoIterator for IntIntervalSet {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a> IntoIterator for &'a IntIntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

/// Iterator over every point covered by an [`IntIntervalSet`],
/// in strictly ascending order.
pub struct Points<'a> {
    intervals: std::slice::Iter<'a, Interval>,
    current: Option<Interval>,
}

// `Points` is always fused. (See definition of `next` below.)
impl<'a> FusedIterator for Points<'a> {}

impl<'a> Iterator for Points<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        loop {
            if let Some(current) = self.current {
                // Shrink the pending interval from below rather than
                // counting past its end, so an upper bound of
                // DOMAIN_MAX can't overflow.
                self.current = if current.lower == current.upper {
                    None
                } else {
                    Some(Interval::new(current.lower + 1, current.upper))
                };
                return Some(current.lower);
            }
            self.current = Some(*self.intervals.next()?);
        }
    }
}

#[cfg(feature = "serde1")]
impl Serialize for IntIntervalSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.intervals.len()))?;
        for interval in &self.intervals {
            seq.serialize_element(&(interval.lower, interval.upper))?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde1")]
impl<'de> Deserialize<'de> for IntIntervalSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(IntIntervalSetVisitor)
    }
}

#[cfg(feature = "serde1")]
struct IntIntervalSetVisitor;

#[cfg(feature = "serde1")]
impl<'de> Visitor<'de> for IntIntervalSetVisitor {
    type Value = IntIntervalSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of (lower, upper) interval bounds")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        // Rebuild through `union` so any valid input sequence lands
        // in normalized form.
        let mut set = IntIntervalSet::new();
        while let Some((lower, upper)) = access.next_element::<(i64, i64)>()? {
            set.union(lower, upper).map_err(serde::de::Error::custom)?;
        }
        Ok(set)
    }
}
