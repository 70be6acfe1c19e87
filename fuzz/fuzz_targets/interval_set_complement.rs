#![no_main]
use libfuzzer_sys::fuzz_target;

use int_interval_set::IntIntervalSet;

fuzz_target!(|intervals: Vec<(i8, u8)>| {
    let mut set = IntIntervalSet::new();

    for (lower, width) in intervals {
        let lower = lower as i64;
        set.union(lower, lower + width as i64).unwrap();
    }

    let complement = set.complement();

    // Every point lands in exactly one of the two sets.
    for point in -600..=600 {
        if set.contains(point) == complement.contains(point) {
            panic!()
        }
    }

    if complement.complement() != set {
        panic!()
    }
});
