//! Span excision, ambiguous-base stripping and the minimum-length filter.
//!
//! ### Coordinates
//! Spans are 1-based inclusive on input. The walk works on 0-based half-open
//! slices: a span `start..end` removes `[start - 1, end)`.
//!
//! ### Naming
//! Whole-sequence mode yields at most one fragment without an index; spanned
//! mode numbers survivors `1, 2, ...` left to right, skipping nothing, so a
//! lone survivor is still `_1`.
//!
//! ### Example
//! ```
//! use scaftrim::fragment::{fragment_spanned, strip_ambiguous};
//! use scaftrim::trim::Span;
//!
//! assert_eq!(strip_ambiguous(b"NNACGTNN"), b"ACGT");
//! let seq = b"AAAAACCCCCGGGGG";
//! let frags = fragment_spanned(seq, &[Span::new(6, 10).unwrap()], 5);
//! assert_eq!(frags.len(), 2);
//! assert_eq!(frags[1].name("ctg"), "ctg_2");
//! assert_eq!(frags[1].seq, b"GGGGG");
//! ```
use crate::record::AMBIGUOUS_BASE;
use crate::trim::Span;

/// Shortest sequence or fragment kept in any output.
pub const DEFAULT_MIN_LENGTH: usize = 200;

/// A surviving piece of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// 1-based position among survivors; `None` for whole-sequence output.
    pub index: Option<usize>,
    pub seq: &'a [u8],
}

impl Fragment<'_> {
    /// Output name for this fragment of record `id`.
    pub fn name(&self, id: &str) -> String {
        match self.index {
            Some(n) => format!("{}_{}", id, n),
            None => id.to_string(),
        }
    }
}

/// Remove leading and trailing runs of [`AMBIGUOUS_BASE`].
pub fn strip_ambiguous(seq: &[u8]) -> &[u8] {
    let start = seq.iter().position(|&b| b != AMBIGUOUS_BASE).unwrap_or(seq.len());
    let end = seq.iter().rposition(|&b| b != AMBIGUOUS_BASE).map_or(start, |i| i + 1);
    &seq[start..end]
}

/// Whole-sequence mode: strip, then keep only if at least `min_len` long.
pub fn fragment_whole(seq: &[u8], min_len: usize) -> Option<Fragment<'_>> {
    let stripped = strip_ambiguous(seq);
    (stripped.len() >= min_len).then_some(Fragment { index: None, seq: stripped })
}

fn push_survivor<'a>(out: &mut Vec<Fragment<'a>>, piece: &'a [u8], min_len: usize) {
    let stripped = strip_ambiguous(piece);
    if stripped.len() >= min_len {
        out.push(Fragment { index: Some(out.len() + 1), seq: stripped });
    } else {
        tracing::trace!(len = stripped.len(), min_len, "piece below minimum length discarded");
    }
}

/// Spanned mode: cut every span out of `seq` and return the surviving pieces.
///
/// Spans are sorted by `(start, end)` and never merged. The cursor is set to
/// each span's end in turn, so a span nested inside an earlier one moves it
/// back and the tail after the nested span is offered again.
/// Spans reaching past the end of `seq` are clamped.
pub fn fragment_spanned<'a>(seq: &'a [u8], spans: &[Span], min_len: usize) -> Vec<Fragment<'a>> {
    let mut ordered = spans.to_vec();
    ordered.sort_unstable();

    let n = seq.len();
    let mut out = Vec::new();
    let mut last_end = 0usize;
    for span in &ordered {
        let (start, end) = span.zero_based();
        if last_end < start {
            push_survivor(&mut out, &seq[last_end.min(n)..start.min(n)], min_len);
        }
        last_end = end;
    }
    if last_end < n {
        push_survivor(&mut out, &seq[last_end..], min_len);
    }
    out
}

/// Dispatch on whether there are spans to apply.
pub fn fragment<'a>(seq: &'a [u8], spans: Option<&[Span]>, min_len: usize) -> Vec<Fragment<'a>> {
    match spans {
        Some(spans) => fragment_spanned(seq, spans, min_len),
        None => fragment_whole(seq, min_len).into_iter().collect(),
    }
}
