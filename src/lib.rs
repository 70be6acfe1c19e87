/*!
[`IntIntervalSet`] is a mutable set of `i64` values stored compactly as
a sorted sequence of disjoint closed intervals. Overlapping and
immediately adjacent intervals are always coalesced into a single
interval, so the representation stays canonical no matter what order
ranges are added in.

On top of the merging engine the set offers range intersection,
complement over the full `i64` domain, point membership, span queries,
and lazy enumeration of every covered point.

# Example

```rust
use int_interval_set::{IntIntervalSet, Interval};

let mut set = IntIntervalSet::new();
set.union(2, 4)?.union(8, 9)?;

// 5 touches the end of 2..=4, so the two coalesce.
set.union_point(5);
assert_eq!(
    set.iter().copied().collect::<Vec<_>>(),
    vec![Interval::new(2, 5), Interval::new(8, 9)],
);

assert!(set.contains(3));
assert!(!set.contains(6));
assert!(set.complement().contains(6));

let clipped = set.intersection(4, 8)?;
assert_eq!(
    clipped.iter().copied().collect::<Vec<_>>(),
    vec![Interval::new(4, 5), Interval::new(8, 8)],
);
# Ok::<(), int_interval_set::Error>(())
```

# Performance

The set is backed by a sorted `Vec`, with point and endpoint lookups
done by binary search. Unions that overlap or touch existing coverage
are cheap; unions landing in fresh gaps pay for an array splice. If
most of your intervals overlap this won't matter.

## Crate features

By default this crate has no dependencies beyond its error type's
derive. If you enable the **serde1** feature it will introduce a
dependency on the _serde_ crate and provide `Serialize` and
`Deserialize` implementations for [`IntIntervalSet`]:

```toml
[dependencies]
int-interval-set = { version = "0.1", features = ["serde1"] }
```
*/

mod cut;
#[cfg(test)]
mod dense;
pub mod error;
pub mod interval;
pub mod set;

pub use error::Error;
pub use interval::{Interval, DOMAIN_MAX, DOMAIN_MIN};
pub use set::{IntIntervalSet, Points};
