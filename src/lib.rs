#![forbid(unsafe_code)]
//! # scaftrim
//!
//! Clean a scaffold FASTA file against an **exclusion list** and a **trim
//! table**, producing three cleaned variants:
//!
//! 1. **exclude-only**: listed scaffolds removed, everything else untouched;
//! 2. **lenient**: contaminant spans cut out and `N` runs stripped from the
//!    ends of each piece, except for scaffolds marked `mitochondrion-not_cleaned`,
//!    which are only stripped;
//! 3. **full-trim**: like *lenient*, but scaffolds marked
//!    `mitochondrion-not_cleaned` are left out.
//!
//! Every output drops sequences and fragments shorter than the minimum
//! length (200 by default).
//!
//! ## Inputs
//! - exclusion table: one identifier per line (first tab-separated field);
//! - trim table: `id<TAB>length<TAB>spans<TAB>source`, with spans written as
//!   `start..end,start..end` (1-based, inclusive);
//! - sequences in `>`-header format, optionally gzip-compressed.
//!
//! ## Examples
//! ```rust
//! use scaftrim::{clean, ExclusionSet, RecordStore, TrimTable};
//!
//! let seq = format!("NNN{}NNN", "ACGT".repeat(60));
//! let records: RecordStore = [("scf1", seq.as_str()), ("scf2", seq.as_str())].into_iter().collect();
//! let excluded: ExclusionSet = ["scf2"].into_iter().collect();
//! let variants = clean(&records, &excluded, &TrimTable::new(), 200);
//! assert_eq!(variants.lenient["scf1"].len(), 240);
//! assert!(!variants.exclude_only.contains_key("scf2"));
//! ```

pub mod clean;
pub mod config;
pub mod error;
pub mod exclude;
pub mod fragment;
pub mod record;
pub mod seqio;
pub mod tables;
pub mod trim;
pub mod variant;

pub use clean::{clean, run, RunSummary};
pub use config::{Config, OutputPaths};
pub use error::{CleanError, Result};
pub use exclude::{filter_excluded, ExclusionSet};
pub use fragment::{Fragment, DEFAULT_MIN_LENGTH};
pub use record::RecordStore;
pub use trim::{Span, SpanList, TrimDirective, TrimTable};
pub use variant::{build_variants, OutputCollection, Variant, Variants};

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
