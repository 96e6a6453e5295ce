//! Trim directives: which regions of a scaffold should be cut out.
//!
//! A directive comes from one line of the trim table:
//!
//! ```text
//! scaffold_7<TAB>5120<TAB>1..240,4100..4400<TAB>adaptor:NGB00972.1
//! scaffold_9<TAB>16300<TAB>mitochondrion-not_cleaned<TAB>organelle
//! ```
//!
//! The span field is decoded into a [`SpanList`] so that the sentinel is a
//! typed alternative rather than a magic string inside a list of ranges.
//!
//! # Examples
//! ```
//! use scaftrim::trim::{SpanList, Span};
//! let spans: SpanList = "300..350,100..150".parse().unwrap();
//! assert_eq!(spans, SpanList::Spans(vec![Span::new(300, 350).unwrap(), Span::new(100, 150).unwrap()]));
//! assert_eq!("mitochondrion-not_cleaned".parse::<SpanList>().unwrap(), SpanList::Sentinel);
//! assert_eq!("".parse::<SpanList>().unwrap(), SpanList::NoTrim);
//! ```
use core::fmt;
use std::collections::HashMap;
use std::str::FromStr;

/// Literal used in the span field to mean "leave this sequence uncleaned".
pub const NOT_CLEANED_SENTINEL: &str = "mitochondrion-not_cleaned";

/// A region to excise, 1-based and inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// `None` unless `1 <= start <= end`.
    pub fn new(start: usize, end: usize) -> Option<Self> {
        (start >= 1 && end >= start).then_some(Span { start, end })
    }

    /// Half-open, 0-based bounds of the excised region.
    pub fn zero_based(&self) -> (usize, usize) {
        (self.start - 1, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Why a span field could not be decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanParseError(pub String);

impl fmt::Display for SpanParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid span `{}`", self.0)
    }
}

impl std::error::Error for SpanParseError {}

impl FromStr for Span {
    type Err = SpanParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || SpanParseError(s.to_string());
        let (a, b) = s.trim().split_once("..").ok_or_else(bad)?;
        let start = a.trim().parse::<usize>().map_err(|_| bad())?;
        let end = b.trim().parse::<usize>().map_err(|_| bad())?;
        Span::new(start, end).ok_or_else(bad)
    }
}

/// Decoded span field of a trim directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpanList {
    /// Empty field: nothing to cut.
    NoTrim,
    /// The [`NOT_CLEANED_SENTINEL`] literal was given as the first element.
    Sentinel,
    /// One or more regions, in the order they were listed.
    Spans(Vec<Span>),
}

impl SpanList {
    /// Regions to cut, if any are present.
    pub fn spans(&self) -> Option<&[Span]> {
        match self {
            SpanList::Spans(v) => Some(v.as_slice()),
            SpanList::NoTrim | SpanList::Sentinel => None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, SpanList::Sentinel)
    }
}

impl FromStr for SpanList {
    type Err = SpanParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(SpanList::NoTrim);
        }
        let mut parts = s.split(',');
        if parts.clone().next().map(str::trim) == Some(NOT_CLEANED_SENTINEL) {
            if parts.nth(1).is_some() {
                tracing::warn!(field = s, "entries after the not-cleaned sentinel are ignored");
            }
            return Ok(SpanList::Sentinel);
        }
        let spans = parts.map(str::parse::<Span>).collect::<Result<Vec<_>, _>>()?;
        Ok(SpanList::Spans(spans))
    }
}

/// Trimming metadata for one scaffold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrimDirective {
    /// Length declared in the table; informational only.
    pub declared_length: i64,
    pub spans: SpanList,
    /// Opaque annotation naming where the contamination call came from.
    pub source: String,
}

/// Identifier → directive.
#[derive(Clone, Debug, Default)]
pub struct TrimTable {
    directives: HashMap<String, TrimDirective>,
}

impl TrimTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later lines for the same identifier replace earlier ones.
    pub fn insert(&mut self, id: impl Into<String>, directive: TrimDirective) {
        self.directives.insert(id.into(), directive);
    }

    pub fn get(&self, id: &str) -> Option<&TrimDirective> {
        self.directives.get(id)
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

/// Reason a trim-table line was not turned into a directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectiveError {
    TooFewFields(usize),
    DeclaredLength(String),
    Span(SpanParseError),
}

impl fmt::Display for DirectiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveError::TooFewFields(n) => write!(f, "expected at least 4 fields, found {}", n),
            DirectiveError::DeclaredLength(s) => write!(f, "declared length `{}` is not an integer", s),
            DirectiveError::Span(e) => write!(f, "{}", e),
        }
    }
}

/// Build `(id, directive)` from the fields of one trim-table line.
pub fn directive_from_fields<S: AsRef<str>>(fields: &[S]) -> Result<(String, TrimDirective), DirectiveError> {
    if fields.len() < 4 {
        return Err(DirectiveError::TooFewFields(fields.len()));
    }
    let id = fields[0].as_ref().to_string();
    let len_field = fields[1].as_ref();
    let declared_length = len_field
        .parse::<i64>()
        .map_err(|_| DirectiveError::DeclaredLength(len_field.to_string()))?;
    let spans = fields[2].as_ref().parse::<SpanList>().map_err(DirectiveError::Span)?;
    let source = fields[3].as_ref().to_string();
    Ok((id, TrimDirective { declared_length, spans, source }))
}
