use crate::interval::Interval;

/// Classification of a single point's position relative to a sorted,
/// normalized interval slice.
///
/// `index` is the position at which the point would be inserted as a
/// standalone singleton to keep the slice sorted, unless `contained`
/// is set, in which case it names the interval already covering the
/// point. `connected` is set whenever the point is contained in, or
/// immediately adjacent to, the interval at `index`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct CutPoint {
    pub index: usize,
    pub contained: bool,
    pub connected: bool,
}

impl CutPoint {
    fn detached(index: usize) -> CutPoint {
        CutPoint {
            index,
            contained: false,
            connected: false,
        }
    }

    fn adjacent(index: usize) -> CutPoint {
        CutPoint {
            index,
            contained: false,
            connected: true,
        }
    }

    fn contained(index: usize) -> CutPoint {
        CutPoint {
            index,
            contained: true,
            connected: true,
        }
    }
}

/// Finds the cut point for `point` in a sorted, normalized slice.
pub(crate) fn find(intervals: &[Interval], point: i64) -> CutPoint {
    find_hinted(intervals, point, None, None)
}

/// Finds the cut point for `point`, narrowing the binary search using
/// the index of a previously located cut point at or before it
/// (`min_hint`) and/or one known to be at or after it (`max_hint`).
///
/// Hints are purely an optimization: the result is identical to an
/// unhinted search.
pub(crate) fn find_hinted(
    intervals: &[Interval],
    point: i64,
    min_hint: Option<usize>,
    max_hint: Option<usize>,
) -> CutPoint {
    if intervals.is_empty() {
        return CutPoint::detached(0);
    }

    // Back the lower hint off by one so an interval containing both
    // the hinted cut point and this point is still examined.
    let mut min = min_hint.map_or(0, |hint| hint.saturating_sub(1));
    min = min.min(intervals.len() - 1);
    let mut max = max_hint.map_or(intervals.len() - 1, |hint| hint.min(intervals.len() - 1));
    max = max.max(min);

    loop {
        let mid = min + (max - min) / 2;
        let middle = &intervals[mid];
        // Checked arithmetic so adjacency tests can't wrap at the
        // domain extremes. `adjacent_below` can only hold when the
        // point is above `middle`, `adjacent_above` only below it.
        let adjacent_below = middle.upper.checked_add(1) == Some(point);
        let adjacent_above = middle.lower.checked_sub(1) == Some(point);

        if middle.lower < point {
            if middle.upper >= point {
                return CutPoint::contained(mid);
            }

            if min == max || adjacent_below {
                if adjacent_below {
                    return CutPoint::adjacent(mid);
                }
                return CutPoint::detached(mid + 1);
            }

            min = mid + 1;
        } else if middle.lower == point {
            return CutPoint::contained(mid);
        } else if min == max {
            if adjacent_above {
                return gap_adjacency(intervals, mid, point);
            }
            return CutPoint::detached(mid);
        } else if adjacent_above {
            return gap_adjacency(intervals, mid, point);
        } else if mid == 0 {
            return CutPoint::detached(0);
        } else if min == max - 1 {
            // Everything below `min` was already ruled out, so the
            // point belongs in the gap right before `intervals[min]`.
            return CutPoint::detached(min);
        } else {
            max = mid - 1;
        }
    }
}

// `point` sits one below `intervals[index].lower`. In a single-integer
// gap it is also one above the previous interval's upper bound, and
// which of the two neighbors the binary search meets first depends on
// the search window. Always resolve to the lower-indexed neighbor so
// hinted and unhinted searches agree.
fn gap_adjacency(intervals: &[Interval], index: usize, point: i64) -> CutPoint {
    if index > 0 && intervals[index - 1].upper.checked_add(1) == Some(point) {
        return CutPoint::adjacent(index - 1);
    }
    CutPoint::adjacent(index)
}
