#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use int_interval_set::IntIntervalSet;

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Union(i8, u8),
    UnionPoint(i8),
}

impl Op {
    fn apply(self, set: &mut IntIntervalSet) {
        match self {
            Op::Union(lower, width) => {
                let lower = lower as i64;
                set.union(lower, lower + width as i64).unwrap();
            }
            Op::UnionPoint(point) => {
                set.union_point(point as i64);
            }
        }
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut set = IntIntervalSet::new();

    for op in ops {
        op.apply(&mut set);
    }

    let mut peek = set.iter().peekable();
    while let Some(interval) = peek.next() {
        if interval.lower > interval.upper {
            panic!()
        }
        if let Some(next) = peek.peek() {
            if interval.upper >= next.lower - 1 {
                panic!()
            }
        }
    }
});
