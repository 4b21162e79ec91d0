//! Property-based tests for prefix-coded terms and range splitting.

use proptest::prelude::*;

use numtrie::numeric::config::NumericConfig;
use numtrie::numeric::ladder::{ladder, ladder_len, ladder_with_config};
use numtrie::numeric::prefix_coded::{PrefixCoded, decode, encode};
use numtrie::numeric::sortable::{from_sortable, to_sortable};
use numtrie::query::NumericRangeQuery;

fn arb_shift() -> impl Strategy<Value = u32> {
    0u32..64
}

/// Values clustered near interesting boundaries as well as anywhere.
fn arb_value() -> impl Strategy<Value = i64> {
    prop_oneof![
        any::<i64>(),
        -1000i64..1000,
        (i64::MIN..i64::MIN + 1000),
        (i64::MAX - 1000..=i64::MAX),
    ]
}

proptest! {
    #[test]
    fn sortable_round_trip(value in any::<i64>()) {
        prop_assert_eq!(from_sortable(to_sortable(value)), value);
    }

    #[test]
    fn order_preserved_at_every_shift(a in arb_value(), b in arb_value(), shift in arb_shift()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_term = PrefixCoded::new(lo, shift).unwrap();
        let hi_term = PrefixCoded::new(hi, shift).unwrap();
        if to_sortable(lo) >> shift == to_sortable(hi) >> shift {
            prop_assert_eq!(lo_term, hi_term);
        } else {
            prop_assert!(lo_term < hi_term);
        }
    }

    #[test]
    fn full_precision_round_trip(value in arb_value()) {
        let term = encode(to_sortable(value), 0).unwrap();
        prop_assert_eq!(decode(term.as_bytes()).unwrap(), (value, 0));
    }

    #[test]
    fn reduced_precision_zeroes_low_bits(value in arb_value(), shift in 1u32..64) {
        let term = encode(to_sortable(value), shift).unwrap();
        let (decoded, decoded_shift) = decode(term.as_bytes()).unwrap();
        let expected = from_sortable((to_sortable(value) >> shift) << shift);
        prop_assert_eq!(decoded_shift, shift);
        prop_assert_eq!(decoded, expected);
    }

    #[test]
    fn ladder_terms_are_distinct(value in arb_value(), step in 1u32..=64) {
        let terms = ladder(value, step).unwrap();
        prop_assert_eq!(terms.len(), ladder_len(step));
        let full = PrefixCoded::full_precision(value);
        prop_assert_eq!(terms[0].as_bytes(), full.as_bytes());

        let mut bytes: Vec<&[u8]> = terms.iter().map(|t| t.as_bytes()).collect();
        bytes.sort();
        bytes.dedup();
        prop_assert_eq!(bytes.len(), terms.len());
    }

    #[test]
    fn truncated_terms_are_rejected(value in arb_value(), shift in arb_shift(), cut in 1usize..10) {
        let term = PrefixCoded::new(value, shift).unwrap();
        let keep = term.len().saturating_sub(cut);
        prop_assert!(decode(&term.as_bytes()[..keep]).is_err());
    }

    #[test]
    fn split_matches_exactly_once_inside_range(
        a in arb_value(),
        b in arb_value(),
        probe in arb_value(),
        step in prop_oneof![Just(1u32), Just(4), Just(8), Just(16), 1u32..=64],
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let config = NumericConfig::with_precision_step(step).unwrap();
        let query = NumericRangeQuery::new("value", Some(lo), Some(hi))
            .with_config(config)
            .unwrap();
        let ranges = query.term_ranges().unwrap();

        for candidate in [lo, hi, probe, lo.saturating_sub(1), hi.saturating_add(1)] {
            let terms = ladder_with_config(candidate, &config).unwrap();
            let hits = ranges
                .iter()
                .filter(|range| terms.iter().any(|t| range.contains_term(t.as_bytes())))
                .count();
            let inside = lo <= candidate && candidate <= hi;
            prop_assert_eq!(hits, usize::from(inside), "candidate {}", candidate);
        }
    }
}
