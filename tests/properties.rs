use proptest::prelude::*;

use scaftrim::fragment::{fragment_spanned, fragment_whole, strip_ambiguous};
use scaftrim::{build_variants, RecordStore, Span, TrimTable};

fn seq_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'A', b'C', b'G', b'T', b'N']), 0..600)
}

fn spans_strategy() -> impl Strategy<Value = Vec<Span>> {
    prop::collection::vec((1usize..700, 0usize..80), 0..8)
        .prop_map(|v| v.into_iter().map(|(s, w)| Span::new(s, s + w).unwrap()).collect())
}

proptest! {
    #[test]
    fn strip_is_idempotent(seq in seq_strategy()) {
        let once = strip_ambiguous(&seq);
        prop_assert_eq!(strip_ambiguous(once), once);
        prop_assert!(once.first() != Some(&b'N') && once.last() != Some(&b'N'));
    }

    #[test]
    fn survivors_are_numbered_contiguously(seq in seq_strategy(), spans in spans_strategy(), min_len in 1usize..120) {
        let frags = fragment_spanned(&seq, &spans, min_len);
        for (i, f) in frags.iter().enumerate() {
            prop_assert_eq!(f.index, Some(i + 1));
            prop_assert!(f.seq.len() >= min_len);
            prop_assert_eq!(strip_ambiguous(f.seq), f.seq);
        }
    }

    #[test]
    fn whole_mode_matches_stripped_sequence(seq in seq_strategy(), min_len in 0usize..300) {
        let stripped = strip_ambiguous(&seq);
        match fragment_whole(&seq, min_len) {
            Some(f) => { prop_assert!(stripped.len() >= min_len); prop_assert_eq!(f.seq, stripped); }
            None => prop_assert!(stripped.len() < min_len),
        }
    }

    #[test]
    fn undirected_records_are_identical_in_both_trimming_variants(seq in seq_strategy()) {
        let mut records = RecordStore::new();
        records.insert("r", &seq);
        let v = build_variants(&records, &TrimTable::new(), 200);
        prop_assert_eq!(&v.lenient, &v.full_trim);
        let stripped = strip_ambiguous(&seq);
        prop_assert_eq!(v.lenient.get("r").map(Vec::as_slice), (stripped.len() >= 200).then_some(stripped));
        prop_assert_eq!(v.exclude_only.contains_key("r"), seq.len() >= 200);
    }
}
