use super::*;
use proptest::prelude::*;
use runes_core::MAX_CODE_POINT;

fn any_code_point() -> impl Strategy<Value = u32> {
    0..=MAX_CODE_POINT
}

fn any_range() -> impl Strategy<Value = (u32, u32)> {
    (any_code_point(), any_code_point()).prop_map(|(a, b)| (a.min(b), a.max(b)))
}

// Property: set then unset restores absence
proptest! {
    #[test]
    fn prop_set_unset_membership(v in any_code_point()) {
        let mut set = CodepointSet::new();
        prop_assert!(!set.contains(v));

        set.set(&[v]).unwrap();
        prop_assert!(set.contains(v));

        set.unset(&[v]);
        prop_assert!(!set.contains(v));
    }
}

// Property: a single range serializes to exactly one run
proptest! {
    #[test]
    fn prop_range_is_one_run((a, b) in any_range()) {
        let mut set = CodepointSet::new();
        set.set_range(a, b).unwrap();

        prop_assert_eq!(set.runs().collect::<Vec<_>>(), vec![(a, b)]);
        prop_assert_eq!(set.len(), (b - a + 1) as usize);
    }
}

// Property: range mutation matches value-by-value mutation
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn prop_range_matches_values(
        base in 0u32..=(MAX_CODE_POINT - 4096),
        lo in 0u32..2048,
        len in 0u32..2048,
        set_first in any::<bool>(),
    ) {
        let (from, to) = (base + lo, base + lo + len);
        let values: Vec<u32> = (from..=to).collect();

        let mut by_range = CodepointSet::new();
        let mut by_value = CodepointSet::new();
        if set_first {
            by_range.set_range(base, base + 4095).unwrap();
            by_value.set_range(base, base + 4095).unwrap();
            by_range.unset_range(from, to).unwrap();
            by_value.unset(&values);
        } else {
            by_range.set_range(from, to).unwrap();
            by_value.set(&values).unwrap();
        }
        prop_assert_eq!(by_range, by_value);
    }
}

// Property: unsetting an interior value splits a run in two
proptest! {
    #[test]
    fn prop_interior_unset_splits((a, b) in any_range(), offset in any::<u32>()) {
        prop_assume!(b - a >= 2);
        let hole = a + 1 + offset % (b - a - 1);

        let mut set = CodepointSet::new();
        set.set_range(a, b).unwrap();
        set.unset(&[hole]);

        prop_assert_eq!(set.runs().collect::<Vec<_>>(), vec![(a, hole - 1), (hole + 1, b)]);
    }
}

// Property: overlapping or adjacent ranges merge
proptest! {
    #[test]
    fn prop_touching_ranges_merge((a, b) in any_range(), extra in 0u32..1000) {
        let c = b.saturating_add(1).min(MAX_CODE_POINT);
        let d = c.saturating_add(extra).min(MAX_CODE_POINT);

        let mut set = CodepointSet::new();
        set.set_range(a, b).unwrap();
        set.set_range(c, d).unwrap();

        prop_assert_eq!(set.runs().count(), 1);
    }
}

// Property: every resolved valid rune has self-consistent encodings
proptest! {
    #[test]
    fn prop_encodings_round_trip(ch in any::<char>()) {
        let info = RuneResolver::default().resolve(u32::from(ch));
        prop_assert!(info.valid);

        let from_utf8 = std::str::from_utf8(&info.utf8).unwrap();
        prop_assert_eq!(from_utf8.chars().collect::<Vec<_>>(), vec![ch]);

        let from_utf16 = String::from_utf16(&info.utf16).unwrap();
        prop_assert_eq!(from_utf16.chars().collect::<Vec<_>>(), vec![ch]);
    }
}
