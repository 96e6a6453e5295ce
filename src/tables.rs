//! Loaders for the two tab-separated side tables (exclusions and trims).
//!
//! Both tables have no header and no quoting. Fields are whitespace-trimmed
//! and trailing empty fields are ignored. Lines that cannot be interpreted
//! are skipped rather than failing the run; the trim loader reports how many.
use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{CleanError, Result};
use crate::exclude::ExclusionSet;
use crate::trim::{directive_from_fields, DirectiveError, TrimTable};

fn tab_reader<R: io::Read>(r: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .quoting(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(r)
}

fn significant_fields(rec: &csv::StringRecord) -> Vec<&str> {
    let mut fields: Vec<&str> = rec.iter().collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Read an exclusion table: the first field of every non-blank line.
pub fn read_exclusions<R: io::Read>(r: R) -> std::result::Result<ExclusionSet, csv::Error> {
    let mut set = ExclusionSet::new();
    for rec in tab_reader(r).records() {
        let rec = rec?;
        match rec.get(0) {
            Some(id) if !id.is_empty() => set.insert(id),
            _ => {}
        }
    }
    Ok(set)
}

/// Read a trim table, returning the table and the number of lines dropped.
pub fn read_trim_table<R: io::Read>(r: R) -> std::result::Result<(TrimTable, usize), csv::Error> {
    let mut table = TrimTable::new();
    let mut dropped = 0usize;
    for rec in tab_reader(r).records() {
        let rec = rec?;
        let line = rec.position().map_or(0, |p| p.line());
        match directive_from_fields(&significant_fields(&rec)) {
            Ok((id, d)) => table.insert(id, d),
            Err(e @ DirectiveError::TooFewFields(_)) => {
                tracing::debug!(line, "trim table line skipped: {}", e);
                dropped += 1;
            }
            Err(e) => {
                tracing::warn!(line, "trim table line skipped: {}", e);
                dropped += 1;
            }
        }
    }
    Ok((table, dropped))
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| CleanError::io(path, e))
}

/// Load the exclusion table at `path`.
pub fn load_exclusions<P: AsRef<Path>>(path: P) -> Result<ExclusionSet> {
    let p = path.as_ref();
    read_exclusions(open(p)?).map_err(|source| CleanError::Table { path: p.to_path_buf(), source })
}

/// Load the trim table at `path`; see [`read_trim_table`].
pub fn load_trim_table<P: AsRef<Path>>(path: P) -> Result<(TrimTable, usize)> {
    let p = path.as_ref();
    read_trim_table(open(p)?).map_err(|source| CleanError::Table { path: p.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trim::{Span, SpanList};

    #[test]
    fn exclusions_take_first_field_only() {
        let data = "contig_4\tadaptor\tlow\n\n  contig_9 \ncontig_4\n";
        let set = read_exclusions(data.as_bytes()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("contig_4") && set.contains("contig_9"));
        assert!(!set.contains("adaptor"));
    }

    #[test]
    fn trim_table_keeps_well_formed_lines() {
        let data = "\
s1\t5000\t100..150,300..350\tadaptor
s2\t900\tmitochondrion-not_cleaned\torganelle
s3\t700\t\tmanual
s4\t100\t1..5
s5\tabc\t1..5\tx
s6\t100\t5-9\tx
";
        let (table, dropped) = read_trim_table(data.as_bytes()).unwrap();
        assert_eq!(dropped, 3);
        assert_eq!(table.len(), 3);
        let s1 = table.get("s1").unwrap();
        assert_eq!(s1.declared_length, 5000);
        assert_eq!(s1.spans, SpanList::Spans(vec![Span::new(100, 150).unwrap(), Span::new(300, 350).unwrap()]));
        assert_eq!(s1.source, "adaptor");
        assert!(table.get("s2").unwrap().spans.is_sentinel());
        assert_eq!(table.get("s3").unwrap().spans, SpanList::NoTrim);
        assert!(table.get("s4").is_none());
    }

    #[test]
    fn trailing_empty_fields_do_not_count() {
        let (table, dropped) = read_trim_table("s1\t10\t1..2\t\t\n".as_bytes()).unwrap();
        assert_eq!(dropped, 1);
        assert!(table.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_exclusions("/definitely/not/here.tab").unwrap_err();
        assert!(matches!(err, CleanError::Io { .. }));
    }
}
