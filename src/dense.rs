use std::collections::BTreeSet;

use crate::interval::Interval;

// A simple but infeasibly slow and memory-hungry version of
// `IntIntervalSet` for testing: it stores every covered point
// individually. This is just for cross-checking, so it's fine.
#[derive(Eq, PartialEq, Debug)]
pub struct DenseIntSet {
    points: BTreeSet<i64>,
}

impl DenseIntSet {
    pub fn new() -> DenseIntSet {
        DenseIntSet {
            points: BTreeSet::new(),
        }
    }

    pub fn insert(&mut self, lower: i64, upper: i64) {
        for point in lower..=upper {
            self.points.insert(point);
        }
    }

    pub fn contains(&self, point: i64) -> bool {
        self.points.contains(&point)
    }

    // Regroups the stored points into normalized intervals, for
    // comparison against the compact representation.
    pub fn to_intervals(&self) -> Vec<Interval> {
        let mut intervals: Vec<Interval> = Vec::new();
        for &point in &self.points {
            match intervals.last_mut() {
                Some(last) if last.upper + 1 == point => last.upper = point,
                _ => intervals.push(Interval::new(point, point)),
            }
        }
        intervals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regroups_consecutive_points() {
        let mut dense = DenseIntSet::new();
        dense.insert(4, 5);
        dense.insert(1, 2);
        dense.insert(3, 3);
        dense.insert(9, 9);
        assert_eq!(
            dense.to_intervals(),
            vec![Interval::new(1, 5), Interval::new(9, 9)]
        );
        assert!(dense.contains(3));
        assert!(!dense.contains(8));
    }
}
