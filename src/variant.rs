//! The three cleaned variants and the policy that produces each one.
use core::fmt;

use indexmap::IndexMap;

use crate::fragment::{fragment, Fragment};
use crate::record::RecordStore;
use crate::trim::{Span, SpanList, TrimDirective, TrimTable};

/// Which cleaned output a collection belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Excluded records removed; sequences untouched.
    ExcludeOnly,
    /// Spans cut except where the directive carries the not-cleaned sentinel.
    Lenient,
    /// Every numeric span cut; sentinel records left out.
    FullTrim,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::ExcludeOnly, Variant::Lenient, Variant::FullTrim];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::ExcludeOnly => "exclude-only",
            Variant::Lenient => "lenient",
            Variant::FullTrim => "full-trim",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered fragment name → sequence.
pub type OutputCollection = IndexMap<String, Vec<u8>>;

/// The three collections built from one filtered record set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Variants {
    pub exclude_only: OutputCollection,
    pub lenient: OutputCollection,
    pub full_trim: OutputCollection,
}

impl Variants {
    pub fn get(&self, variant: Variant) -> &OutputCollection {
        match variant {
            Variant::ExcludeOnly => &self.exclude_only,
            Variant::Lenient => &self.lenient,
            Variant::FullTrim => &self.full_trim,
        }
    }

    /// Iterate `(variant, collection)` in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Variant, &OutputCollection)> {
        Variant::ALL.into_iter().map(move |v| (v, self.get(v)))
    }
}

/// How a trimming variant treats one record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution<'t> {
    /// Strip ambiguous ends and threshold the whole sequence.
    Whole,
    /// Cut the given spans.
    Spanned(&'t [Span]),
    /// Leave the record out of this variant.
    Drop,
}

/// Resolve the directive for a record under `variant`.
///
/// Only numeric spans trigger spanned mode. The lenient variant treats the
/// not-cleaned sentinel like a missing directive; the full-trim variant has
/// no numeric region to keep for it and drops the record.
pub fn resolve(variant: Variant, directive: Option<&TrimDirective>) -> Resolution<'_> {
    let spans = directive.map(|d| &d.spans);
    match (variant, spans) {
        (_, Some(SpanList::Spans(v))) => Resolution::Spanned(v.as_slice()),
        (Variant::FullTrim, Some(SpanList::Sentinel)) => Resolution::Drop,
        _ => Resolution::Whole,
    }
}

fn fragments_for<'a>(seq: &'a [u8], resolution: Resolution<'_>, min_len: usize) -> Vec<Fragment<'a>> {
    match resolution {
        Resolution::Whole => fragment(seq, None, min_len),
        Resolution::Spanned(spans) => fragment(seq, Some(spans), min_len),
        Resolution::Drop => Vec::new(),
    }
}

fn extend(out: &mut OutputCollection, id: &str, frags: &[Fragment<'_>]) {
    for f in frags {
        out.insert(f.name(id), f.seq.to_vec());
    }
}

/// Build all three variants for `records` (already exclusion-filtered).
pub fn build_variants(records: &RecordStore, table: &TrimTable, min_len: usize) -> Variants {
    let mut variants = Variants::default();
    for (id, seq) in records.iter() {
        if seq.len() >= min_len {
            variants.exclude_only.insert(id.to_string(), seq.to_vec());
        }

        let directive = table.get(id);
        let lenient = resolve(Variant::Lenient, directive);
        let full = resolve(Variant::FullTrim, directive);

        let frags = fragments_for(seq, lenient, min_len);
        extend(&mut variants.lenient, id, &frags);
        if full == lenient {
            extend(&mut variants.full_trim, id, &frags);
        } else {
            extend(&mut variants.full_trim, id, &fragments_for(seq, full, min_len));
        }
        tracing::debug!(id, ?lenient, ?full, fragments = frags.len(), "record cleaned");
    }
    variants
}
