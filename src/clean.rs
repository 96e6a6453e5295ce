//! Pipeline entry point: load, exclude, build variants, hand them to a sink.
use core::fmt;

use crate::config::Config;
use crate::error::Result;
use crate::exclude::{filter_excluded, ExclusionSet};
use crate::record::RecordStore;
use crate::seqio::{self, VariantSink};
use crate::tables;
use crate::trim::TrimTable;
use crate::variant::{build_variants, Variant, Variants};

/// Counts describing one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub records_read: usize,
    pub records_excluded: usize,
    /// Exclusion entries that named no record.
    pub unmatched_exclusions: usize,
    pub directives: usize,
    pub trim_lines_dropped: usize,
    /// Entries per variant, in output order.
    pub written: Vec<(Variant, usize)>,
}

impl RunSummary {
    pub fn entries(&self, variant: Variant) -> Option<usize> {
        self.written.iter().find(|(v, _)| *v == variant).map(|(_, n)| *n)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "records_read\t{}", self.records_read)?;
        writeln!(f, "records_excluded\t{}", self.records_excluded)?;
        writeln!(f, "unmatched_exclusions\t{}", self.unmatched_exclusions)?;
        writeln!(f, "trim_directives\t{}", self.directives)?;
        writeln!(f, "trim_lines_dropped\t{}", self.trim_lines_dropped)?;
        for (v, n) in &self.written {
            writeln!(f, "{}\t{}", v, n)?;
        }
        Ok(())
    }
}

/// Pure core of a run: exclusion filter followed by the variant builder.
pub fn clean(records: &RecordStore, exclusions: &ExclusionSet, trims: &TrimTable, min_len: usize) -> Variants {
    let kept = filter_excluded(records, exclusions);
    build_variants(&kept, trims, min_len)
}

/// Run the whole pipeline described by `config`, writing through `sink`.
pub fn run<S: VariantSink + ?Sized>(config: &Config, sink: &mut S) -> Result<RunSummary> {
    let exclusions = tables::load_exclusions(&config.exclude)?;
    let (trims, trim_lines_dropped) = tables::load_trim_table(&config.trim)?;
    let records = seqio::load_records(&config.fasta)?;
    tracing::info!(
        records = records.len(),
        exclusions = exclusions.len(),
        directives = trims.len(),
        dropped_lines = trim_lines_dropped,
        "inputs loaded"
    );

    let kept = filter_excluded(&records, &exclusions);
    let variants = build_variants(&kept, &trims, config.min_length);

    let mut summary = RunSummary {
        records_read: records.len(),
        records_excluded: records.len() - kept.len(),
        unmatched_exclusions: exclusions.unmatched(&records).count(),
        directives: trims.len(),
        trim_lines_dropped,
        written: Vec::with_capacity(Variant::ALL.len()),
    };
    for (variant, collection) in variants.iter() {
        sink.write_variant(variant, collection)?;
        summary.written.push((variant, collection.len()));
    }
    tracing::info!(
        excluded = summary.records_excluded,
        exclude_only = variants.exclude_only.len(),
        lenient = variants.lenient.len(),
        full_trim = variants.full_trim.len(),
        "clean finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bases(len: usize) -> String {
        "ACGT".chars().cycle().take(len).collect()
    }

    #[test]
    fn excluded_records_never_reach_any_variant() {
        let s = bases(300);
        let records: RecordStore = [("keep", s.as_str()), ("S4", s.as_str())].into_iter().collect();
        let excl: ExclusionSet = ["S4"].into_iter().collect();
        let v = clean(&records, &excl, &TrimTable::new(), 200);
        for (_, c) in v.iter() {
            assert!(c.contains_key("keep"));
            assert!(!c.keys().any(|k| k.starts_with("S4")));
        }
    }

    #[test]
    fn summary_renders_as_tab_separated_lines() {
        let s = RunSummary {
            records_read: 3,
            records_excluded: 1,
            written: vec![(Variant::ExcludeOnly, 2), (Variant::FullTrim, 4)],
            ..Default::default()
        };
        let text = s.to_string();
        assert!(text.contains("records_read\t3\n"));
        assert!(text.contains("full-trim\t4\n"));
        assert_eq!(s.entries(Variant::ExcludeOnly), Some(2));
        assert_eq!(s.entries(Variant::Lenient), None);
    }
}
