//! Drive CodepointSet with random mutations and compare against a BTreeSet.
//!
//! Each 7-byte chunk is one operation: an opcode and two 24-bit values.
//! Values are allowed past U+10FFFF so the domain checks get exercised too.
//! After every operation the set must agree with the model on the touched
//! values, and at the end its runs must rebuild the model exactly.

#![no_main]

use std::collections::BTreeSet;

use libfuzzer_sys::fuzz_target;
use runes_core::MAX_CODE_POINT;
use runes_unicode::CodepointSet;

fn value(bytes: &[u8]) -> u32 {
    u32::from(bytes[0]) << 16 | u32::from(bytes[1]) << 8 | u32::from(bytes[2])
}

fuzz_target!(|data: &[u8]| {
    // Keep runs short; the final full-domain comparison is the slow part
    if data.len() > 7 * 64 {
        return;
    }

    let mut set = CodepointSet::new();
    let mut model = BTreeSet::new();

    for op in data.chunks_exact(7) {
        let (a, b) = (value(&op[1..4]), value(&op[4..7]));
        match op[0] % 4 {
            0 => {
                let ok = set.set(&[a, b]).is_ok();
                assert_eq!(ok, a <= MAX_CODE_POINT && b <= MAX_CODE_POINT);
                if ok {
                    model.insert(a);
                    model.insert(b);
                }
            },
            1 => {
                set.unset(&[a, b]);
                model.remove(&a);
                model.remove(&b);
            },
            2 => {
                let ok = set.set_range(a, b).is_ok();
                assert_eq!(ok, a <= b && b <= MAX_CODE_POINT);
                if ok && b - a < 4096 {
                    model.extend(a..=b);
                } else if ok {
                    // Too wide to mirror cheaply; clear it on both sides
                    set.unset_range(a, b).ok();
                    model.retain(|v| *v < a || *v > b);
                }
            },
            _ => {
                let ok = set.unset_range(a, b).is_ok();
                assert_eq!(ok, a <= b && b <= MAX_CODE_POINT);
                if ok {
                    model.retain(|v| *v < a || *v > b);
                }
            },
        }
        assert_eq!(set.contains(a), model.contains(&a));
        assert_eq!(set.contains(b), model.contains(&b));
    }

    let rebuilt: BTreeSet<u32> = set.runs().flat_map(|(start, end)| start..=end).collect();
    assert_eq!(rebuilt, model);
    assert_eq!(set.len(), model.len());
});
